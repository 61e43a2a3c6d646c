//! Part-of-speech grouping.
//!
//! Tagged words are bucketed under human-readable category names. Two name
//! tables exist, matching the two detection profiles: a detailed one that
//! covers the full Penn Treebank tag set, and a coarse one whose lookups fall
//! back to the first two characters of the tag.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TaggedToken;
use crate::config::DetectionProfile;

/// Category for tags missing from the active table.
pub const OTHER_CATEGORY: &str = "Other";

const DETAILED_NAMES: &[(&str, &str)] = &[
    ("CC", "Coordinating Conjunction"),
    ("CD", "Cardinal Number"),
    ("DT", "Determiner"),
    ("EX", "Existential There"),
    ("FW", "Foreign Word"),
    ("IN", "Preposition/Subord. Conjunction"),
    ("JJ", "Adjective"),
    ("JJR", "Adjective, comparative"),
    ("JJS", "Adjective, superlative"),
    ("LS", "List Item Marker"),
    ("MD", "Modal Verb"),
    ("NN", "Noun, singular or mass"),
    ("NNS", "Noun, plural"),
    ("NNP", "Proper Noun, singular"),
    ("NNPS", "Proper Noun, plural"),
    ("PDT", "Predeterminer"),
    ("POS", "Possessive Ending"),
    ("PRP", "Personal Pronoun"),
    ("PRP$", "Possessive Pronoun"),
    ("RB", "Adverb"),
    ("RBR", "Adverb, comparative"),
    ("RBS", "Adverb, superlative"),
    ("RP", "Particle"),
    ("SYM", "Symbol"),
    ("TO", "To"),
    ("UH", "Interjection"),
    ("VB", "Verb, base form"),
    ("VBD", "Verb, past tense"),
    ("VBG", "Verb, gerund/present participle"),
    ("VBN", "Verb, past participle"),
    ("VBP", "Verb, non-3rd pers singular present"),
    ("VBZ", "Verb, 3rd pers singular present"),
    ("WDT", "Wh-determiner"),
    ("WP", "Wh-pronoun"),
    ("WP$", "Possessive Wh-pronoun"),
    ("WRB", "Wh-adverb"),
];

const COARSE_NAMES: &[(&str, &str)] = &[
    ("NN", "Noun"),
    ("NNS", "Noun, plural"),
    ("NNP", "Proper Noun"),
    ("NNPS", "Proper Noun, plural"),
    ("VB", "Verb"),
    ("VBD", "Verb, past tense"),
    ("VBG", "Verb, gerund"),
    ("VBN", "Verb, past participle"),
    ("VBP", "Verb, present"),
    ("VBZ", "Verb, 3rd person singular"),
    ("JJ", "Adjective"),
    ("JJR", "Adjective, comparative"),
    ("JJS", "Adjective, superlative"),
    ("RB", "Adverb"),
    ("RBR", "Adverb, comparative"),
    ("RBS", "Adverb, superlative"),
    ("IN", "Preposition"),
    ("PRP", "Pronoun"),
    ("PRP$", "Possessive Pronoun"),
    ("CC", "Conjunction"),
];

static DETAILED: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| DETAILED_NAMES.iter().copied().collect());

static COARSE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| COARSE_NAMES.iter().copied().collect());

/// Lowercase words per category name, both in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartsOfSpeech {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl PartsOfSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: &str, word: &str) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(word.to_lowercase());
    }

    /// Words recorded under a category.
    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    /// Categories in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.categories.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Buckets tagged words into part-of-speech categories.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosGrouper {
    profile: DetectionProfile,
}

impl PosGrouper {
    pub fn new(profile: DetectionProfile) -> Self {
        PosGrouper { profile }
    }

    /// Human-readable category for a raw tag.
    pub fn category(&self, tag: &str) -> &'static str {
        match self.profile {
            DetectionProfile::Interactive => {
                DETAILED.get(tag).copied().unwrap_or(OTHER_CATEGORY)
            }
            DetectionProfile::Export => COARSE
                .get(tag)
                .or_else(|| tag.get(..2).and_then(|prefix| COARSE.get(prefix)))
                .copied()
                .unwrap_or(OTHER_CATEGORY),
        }
    }

    /// Group tagged words, skipping tokens without any alphanumeric character.
    pub fn group(&self, tagged: &[TaggedToken]) -> PartsOfSpeech {
        let mut groups = PartsOfSpeech::new();
        for token in tagged {
            if !token.word.chars().any(char::is_alphanumeric) {
                continue;
            }
            groups.insert(self.category(&token.tag), &token.word);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let groups = PosGrouper::new(DetectionProfile::Interactive)
            .group(&tagged(&[("Rose", "NN"), ("rose", "NN")]));
        assert_eq!(groups.len(), 1);
        let words = groups.get("Noun, singular or mass").unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["rose"]);
    }

    #[test]
    fn test_punctuation_skipped() {
        let groups = PosGrouper::new(DetectionProfile::Interactive)
            .group(&tagged(&[(",", ","), ("...", ":"), ("cat", "NN")]));
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_unknown_tags_are_other() {
        let grouper = PosGrouper::new(DetectionProfile::Interactive);
        let groups = grouper.group(&tagged(&[("zzz", "XYZ"), ("'s", "POS")]));
        assert!(groups.get(OTHER_CATEGORY).unwrap().contains("zzz"));
        assert!(groups.get("Possessive Ending").unwrap().contains("'s"));
    }

    #[test]
    fn test_sorted_output() {
        let groups = PosGrouper::new(DetectionProfile::Interactive).group(&tagged(&[
            ("worm", "NN"),
            ("sick", "JJ"),
            ("bed", "NN"),
        ]));
        let names: Vec<_> = groups.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Adjective", "Noun, singular or mass"]);
        let nouns: Vec<_> = groups
            .get("Noun, singular or mass")
            .unwrap()
            .iter()
            .cloned()
            .collect();
        assert_eq!(nouns, vec!["bed", "worm"]);
    }

    #[test]
    fn test_coarse_table_prefix_fallback() {
        let grouper = PosGrouper::new(DetectionProfile::Export);
        assert_eq!(grouper.category("NN"), "Noun");
        assert_eq!(grouper.category("PRP$"), "Possessive Pronoun");
        assert_eq!(grouper.category("JJX"), "Adjective");
        assert_eq!(grouper.category("MD"), OTHER_CATEGORY);
        assert_eq!(grouper.category("DT"), OTHER_CATEGORY);
        assert_eq!(grouper.category(""), OTHER_CATEGORY);
    }

    #[test]
    fn test_detailed_table_has_no_prefix_fallback() {
        let grouper = PosGrouper::new(DetectionProfile::Interactive);
        assert_eq!(grouper.category("MD"), "Modal Verb");
        assert_eq!(grouper.category("JJX"), OTHER_CATEGORY);
    }

    #[test]
    fn test_empty_input() {
        assert!(PosGrouper::default().group(&[]).is_empty());
    }
}
