//! Match extraction - locates every pattern occurrence with capture offsets.

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// One captured region of the search string.
///
/// `begin` and `end` are inclusive zero-based character offsets into the
/// original search string (never relative to the enclosing match); `token` is
/// the text those offsets cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub begin: usize,
    pub end: usize,
    pub token: String,
}

/// Compiles a matcher pattern.
///
/// Matchers call this once at construction so that a malformed pattern fails
/// fast instead of surfacing mid-search.
///
/// # Errors
/// Returns `PatternError::InvalidPattern` for invalid regex syntax.
pub fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    Ok(Regex::new(pattern)?)
}

/// Finds all occurrences of a pattern in `haystack`, starting at the given
/// character `offset`.
///
/// Each occurrence yields one group: the whole match first, then every
/// participating capture group in declaration order, all with offsets taken
/// from the regex engine rather than re-derived by substring search.
/// Consecutive searches resume one character before the end of the previous
/// match, so occurrences that overlap by a single character (shifted windows
/// over repeated characters) are still reported.
///
/// # Returns
/// Occurrence groups in discovery order; empty when the pattern never occurs.
///
/// # Example
/// `find_all("fishfish", &pattern, 0)` with pattern `(fish)` returns two
/// groups of two captures each, spanning characters 0..=3 and 4..=7.
pub fn find_all(haystack: &str, pattern: &Regex, offset: usize) -> Vec<Vec<Capture>> {
    let mut groups = Vec::new();
    let mut search_at = char_to_byte(haystack, offset);

    while search_at <= haystack.len() {
        let Some(caps) = pattern.captures_at(haystack, search_at) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if whole.is_empty() {
            // A zero-length match can never advance on its own; step one
            // character so the search terminates.
            search_at = next_char_boundary(haystack, whole.start());
            continue;
        }

        let mut captures = Vec::with_capacity(caps.len());
        for m in caps.iter().flatten() {
            if m.is_empty() {
                continue;
            }
            let begin = byte_to_char(haystack, m.start());
            let token = m.as_str();
            captures.push(Capture {
                begin,
                end: begin + token.chars().count() - 1,
                token: token.to_string(),
            });
        }
        groups.push(captures);

        // Resume at the last character of this match, or just past it for a
        // single-character match, so the loop always makes progress.
        let token = whole.as_str();
        search_at = if token.chars().count() == 1 {
            whole.end()
        } else {
            whole.end() - token.chars().next_back().map_or(0, char::len_utf8)
        };
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Pattern extraction found {} occurrence groups", groups.len());

    groups
}

/// Byte position of the `chars`-th character, or the string length when the
/// offset points past the end.
fn char_to_byte(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

fn byte_to_char(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

fn next_char_boundary(s: &str, byte: usize) -> usize {
    byte + s[byte..].chars().next().map_or(1, char::len_utf8)
}
