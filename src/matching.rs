//! Match contract - span value object, guess-count policy, feedback contract.

use secrecy::{ExposeSecret, SecretString};

/// Guess floor for a single-character sub-match.
pub const MIN_SUBMATCH_GUESSES_SINGLE_CHAR: f64 = 10.0;

/// Guess floor for a multi-character sub-match.
pub const MIN_SUBMATCH_GUESSES_MULTI_CHAR: f64 = 50.0;

/// Structured feedback a pattern class produces for the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    /// Human-readable warning; empty when the pattern has nothing to flag.
    pub warning: String,
    /// Suggestions in the order they should be shown.
    pub suggestions: Vec<String>,
}

/// The region of a password covered by one match.
///
/// Frozen at construction: `token` is derived from the password once and the
/// offsets never change afterwards. The full password stays wrapped in
/// [`SecretString`]; only the matched token is held in the clear.
#[derive(Debug)]
pub struct MatchSpan {
    password: SecretString,
    begin: usize,
    end: usize,
    token: String,
}

impl MatchSpan {
    /// Builds a span over `password[begin..=end]` (character offsets).
    ///
    /// # Panics
    /// Panics when `begin <= end < length(password)` is violated. Out-of-range
    /// offsets are a matcher logic error, not a recoverable state.
    pub fn new(password: &SecretString, begin: usize, end: usize) -> Self {
        let pwd = password.expose_secret();
        let pwd_chars = pwd.chars().count();
        assert!(
            begin <= end && end < pwd_chars,
            "match span {}..={} out of bounds for a {}-character password",
            begin,
            end,
            pwd_chars
        );
        let token: String = pwd.chars().skip(begin).take(end - begin + 1).collect();
        Self {
            password: SecretString::new(pwd.into()),
            begin,
            end,
            token,
        }
    }

    /// The full password this span was matched against.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Inclusive character offset where the token begins.
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Inclusive character offset where the token ends.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The matched substring.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Token length in characters.
    pub fn token_chars(&self) -> usize {
        self.token.chars().count()
    }

    /// Password length in characters.
    pub fn password_chars(&self) -> usize {
        self.password.expose_secret().chars().count()
    }

    /// True when the token covers the entire password.
    pub fn covers_password(&self) -> bool {
        self.token_chars() == self.password_chars()
    }
}

/// Contract every pattern-class match satisfies.
///
/// A concrete matcher (dictionary, repeat, sequence, date, spatial, ...)
/// supplies the raw guess formula and the feedback content; the floor and
/// log10 logic below is shared by all of them.
pub trait Match {
    /// The span this match covers.
    fn span(&self) -> &MatchSpan;

    /// Pattern-class tag, e.g. "dictionary" or "repeat".
    fn pattern(&self) -> &'static str;

    /// Pattern-specific estimate of attacker guesses, before the universal
    /// minimum floor is applied.
    fn raw_guesses(&self) -> f64;

    /// Feedback for the user. `is_sole_match` is true when this match covers
    /// the whole password as the only decomposition element.
    fn feedback(&self, is_sole_match: bool) -> Feedback;

    fn begin(&self) -> usize {
        self.span().begin()
    }

    fn end(&self) -> usize {
        self.span().end()
    }

    fn token(&self) -> &str {
        self.span().token()
    }

    /// Floor for sub-matches, so trivially short fragments never report
    /// unrealistically low guess counts. A match spanning the whole password
    /// has no floor; its raw estimate is trusted.
    fn minimum_guesses(&self) -> f64 {
        let span = self.span();
        if span.covers_password() {
            return 0.0;
        }
        if span.token_chars() == 1 {
            MIN_SUBMATCH_GUESSES_SINGLE_CHAR
        } else {
            MIN_SUBMATCH_GUESSES_MULTI_CHAR
        }
    }

    /// Final attacker-guess estimate: the raw estimate, floored.
    fn guesses(&self) -> f64 {
        self.raw_guesses().max(self.minimum_guesses())
    }

    /// Base-10 logarithm of [`Match::guesses`], used by scorers to sum
    /// estimates across a match sequence without overflow.
    fn guesses_log10(&self) -> f64 {
        self.guesses().log10()
    }
}
