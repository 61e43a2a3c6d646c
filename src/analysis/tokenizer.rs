//! Word and sentence tokenization.
//!
//! The poem analyzers only depend on the [`Tokenizer`] trait, so callers can
//! plug in any NLP toolkit. [`unicode::UnicodeTokenizer`] is the built-in
//! implementation.
//!
//! # Examples
//!
//! ```
//! use litloom::analysis::tokenizer::Tokenizer;
//! use litloom::analysis::tokenizer::unicode::UnicodeTokenizer;
//!
//! let tokenizer = UnicodeTokenizer::new();
//! let words: Vec<_> = tokenizer
//!     .tokenize_words("Don't go.")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(words, vec!["Do", "n't", "go", "."]);
//! ```

use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for word and sentence tokenizers.
///
/// Implementations must be stateless (or internally synchronized) so that a
/// single instance can be shared across concurrent analysis calls.
pub trait Tokenizer: Send + Sync {
    /// Split text into word and punctuation tokens, in text order.
    fn tokenize_words(&self, text: &str) -> Result<Vec<Token>>;

    /// Split text into sentences, in text order.
    fn tokenize_sentences(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod unicode;

pub use unicode::UnicodeTokenizer;
