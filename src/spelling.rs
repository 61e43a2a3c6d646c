//! Spell checking for poem text.
//!
//! A [`SpellingDictionary`] supplies known words and frequencies, and
//! [`SpellChecker`] reports unknown words with ranked replacement
//! candidates found by edit distance.

pub mod checker;
pub mod dictionary;
pub mod levenshtein;

pub use checker::{Misspelling, SpellChecker, apply_correction};
pub use dictionary::SpellingDictionary;
