//! Spell checking of poem text.
//!
//! Words are the `\w+` runs of the text. A word is reported when it is
//! purely alphabetic and missing from the dictionary; words containing
//! digits or underscores are never flagged. Suggestions are the dictionary
//! words at the smallest edit distance that yields any candidate, most
//! frequent first.
//!
//! # Examples
//!
//! ```
//! use litloom::spelling::checker::SpellChecker;
//!
//! let checker = SpellChecker::english();
//! let misspellings = checker.check("I wandered lonely as a clowd");
//! assert_eq!(misspellings.len(), 1);
//! assert_eq!(misspellings[0].word, "clowd");
//! assert!(misspellings[0].suggestions.contains(&"cloud".to_string()));
//! ```

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::SpellingConfig;
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::levenshtein::levenshtein_distance_threshold;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// One occurrence of an unknown word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misspelling {
    /// The word as written in the text.
    pub word: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Replacement candidates, best first.
    pub suggestions: Vec<String>,
}

/// Dictionary-based spell checker.
#[derive(Clone, Debug)]
pub struct SpellChecker {
    dictionary: SpellingDictionary,
    config: SpellingConfig,
}

impl SpellChecker {
    pub fn new(dictionary: SpellingDictionary, config: SpellingConfig) -> Self {
        SpellChecker { dictionary, config }
    }

    /// Checker over the built-in English list with default settings.
    pub fn english() -> Self {
        Self::new(SpellingDictionary::english(), SpellingConfig::default())
    }

    pub fn dictionary(&self) -> &SpellingDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &SpellingConfig {
        &self.config
    }

    /// Whether the word is in the dictionary.
    pub fn is_known(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Candidates for a word, at most `max_suggestions` of them.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        for distance in 1..=self.config.max_edit_distance {
            let mut candidates: Vec<(&str, u32)> = self
                .dictionary
                .iter()
                .filter(|(candidate, _)| {
                    levenshtein_distance_threshold(&word, candidate, distance) == Some(distance)
                })
                .collect();
            if candidates.is_empty() {
                continue;
            }
            candidates.sort_by_key(|&(candidate, frequency)| (Reverse(frequency), candidate));
            return candidates
                .into_iter()
                .take(self.config.max_suggestions)
                .map(|(candidate, _)| candidate.to_string())
                .collect();
        }
        Vec::new()
    }

    /// Every occurrence of every unknown word.
    ///
    /// Unknown words are ordered alphabetically (lowercase); occurrences of
    /// one word follow text order.
    pub fn check(&self, text: &str) -> Vec<Misspelling> {
        let mut occurrences: BTreeMap<String, Vec<(usize, usize)>> = BTreeMap::new();
        for found in WORD.find_iter(text) {
            let word = found.as_str();
            if !word.chars().all(char::is_alphabetic) || self.is_known(word) {
                continue;
            }
            occurrences
                .entry(word.to_lowercase())
                .or_default()
                .push((found.start(), found.end()));
        }

        let mut misspellings = Vec::new();
        for (lower, spans) in occurrences {
            let suggestions = self.suggest(&lower);
            log::debug!("Unknown word {lower:?} ({} suggestions)", suggestions.len());
            for (start, end) in spans {
                misspellings.push(Misspelling {
                    word: text[start..end].to_string(),
                    start,
                    end,
                    suggestions: suggestions.clone(),
                });
            }
        }
        misspellings
    }
}

/// Replace one misspelling in `text`.
///
/// The text is returned unchanged when it no longer holds the misspelled
/// word at the recorded offsets.
pub fn apply_correction(text: &str, misspelling: &Misspelling, replacement: &str) -> String {
    match text.get(misspelling.start..misspelling.end) {
        Some(current) if current == misspelling.word => {
            let mut corrected = String::with_capacity(text.len() + replacement.len());
            corrected.push_str(&text[..misspelling.start]);
            corrected.push_str(replacement);
            corrected.push_str(&text[misspelling.end..]);
            corrected
        }
        _ => {
            log::warn!(
                "Misspelling {:?} not found at {}..{}",
                misspelling.word,
                misspelling.start,
                misspelling.end
            );
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(words: &[(&str, u32)]) -> SpellChecker {
        let mut dictionary = SpellingDictionary::new();
        for (word, frequency) in words {
            dictionary.add_word(word, *frequency);
        }
        SpellChecker::new(dictionary, SpellingConfig::default())
    }

    #[test]
    fn test_known_text_is_clean() {
        let checker = checker(&[("the", 10), ("cat", 5), ("sat", 5)]);
        assert!(checker.check("The cat sat.").is_empty());
        assert!(checker.check("").is_empty());
    }

    #[test]
    fn test_digits_never_flagged() {
        let checker = checker(&[("the", 10)]);
        assert!(checker.check("the 1990 r2d2 snake_case").is_empty());
    }

    #[test]
    fn test_order_and_offsets() {
        let checker = checker(&[("night", 10), ("cloud", 10), ("in", 5), ("the", 5)]);
        let text = "Nyght clowd in the nyght";
        let found = checker.check(text);
        let words: Vec<_> = found.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["clowd", "Nyght", "nyght"]);
        assert_eq!((found[1].start, found[1].end), (0, 5));
        assert_eq!(&text[found[2].start..found[2].end], "nyght");
        assert_eq!(found[1].suggestions, vec!["night"]);
    }

    #[test]
    fn test_suggestions_ranked_by_frequency_then_alphabet() {
        let checker = checker(&[("cat", 5), ("bat", 9), ("hat", 5), ("cast", 50)]);
        assert_eq!(checker.suggest("zat"), vec!["bat", "cat", "hat"]);
    }

    #[test]
    fn test_nearest_distance_wins() {
        let checker = checker(&[("worm", 1), ("storm", 100)]);
        // "wor" is one edit from "worm" and two from "storm".
        assert_eq!(checker.suggest("wor"), vec!["worm"]);
        assert_eq!(checker.suggest("stor"), vec!["storm"]);
    }

    #[test]
    fn test_suggestion_limit() {
        let mut checker = checker(&[("bat", 1), ("cat", 1), ("hat", 1), ("mat", 1), ("rat", 1)]);
        checker.config.max_suggestions = 2;
        assert_eq!(checker.suggest("zat"), vec!["bat", "cat"]);
    }

    #[test]
    fn test_no_candidates_within_distance() {
        let checker = checker(&[("night", 1)]);
        assert!(checker.suggest("xylophone").is_empty());
    }

    #[test]
    fn test_apply_correction() {
        let checker = checker(&[("night", 10), ("the", 1), ("in", 1)]);
        let text = "in the nyght";
        let found = checker.check(text);
        assert_eq!(apply_correction(text, &found[0], "night"), "in the night");
        // Stale offsets leave the text untouched.
        assert_eq!(apply_correction("in the", &found[0], "night"), "in the");
    }

    #[test]
    fn test_english_checker_on_example_poem() {
        let checker = SpellChecker::english();
        let found = checker.check(
            "I wandered lonely as a clowd\nThat floats on high o'er vales and hills,\n\
             When all at once I saw a crowd,\nA host, of golden daffodills.",
        );
        let words: Vec<_> = found.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["clowd", "daffodills"]);
        assert!(found[1].suggestions.contains(&"daffodils".to_string()));
    }
}
