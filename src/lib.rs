//! Pattern-match core for password strength estimation
//!
//! This library provides the shared abstraction that password pattern
//! matchers (dictionary, repeat, sequence, date, ...) build on: regex
//! extraction with capture offsets, the uniform match contract with its
//! guess-count floor, and the binomial helper used by combinatorial guess
//! formulas. Concrete matchers and the composing scorer live elsewhere.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_match::{binom, compile_pattern, find_all};
//!
//! let pattern = compile_pattern("(fish)").expect("valid pattern");
//! let groups = find_all("fishfish", &pattern, 0);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0][0].begin, 0);
//! assert_eq!(groups[1][0].token, "fish");
//!
//! assert_eq!(binom(5, 2), 10);
//! ```

// Internal modules
mod binomial;
mod extractor;
mod matching;

// Public API
pub use binomial::binom;
pub use extractor::{Capture, PatternError, compile_pattern, find_all};
pub use matching::{
    Feedback, Match, MatchSpan, MIN_SUBMATCH_GUESSES_MULTI_CHAR,
    MIN_SUBMATCH_GUESSES_SINGLE_CHAR,
};
