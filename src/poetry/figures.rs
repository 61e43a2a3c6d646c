//! Heuristic figure-of-speech detection.
//!
//! All three detectors work sentence by sentence. A sentence containing a bare
//! ` as ` without an `as <word> as` comparison is skipped by every detector,
//! even when ` like ` is also present.
//!
//! - **Simile**: the sentence contains ` like `, or contains ` as ` together
//!   with an `as <word> as` comparison.
//! - **Metaphor**: in the tagged, lowercased sentence a noun is followed by
//!   `is`/`are` and a different noun (`time is money`). The interactive
//!   profile ignores generic complements such as `man` or `thing`.
//! - **Alliteration**: at least three distinct words of two or more letters
//!   start with the same consonant.
//!
//! These are rule-based approximations with known false positives and
//! negatives.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::tagger::Tagger;
use crate::analysis::token::TaggedToken;
use crate::analysis::tokenizer::Tokenizer;
use crate::config::DetectionProfile;
use crate::error::{LitloomError, Result};

static AS_COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bas\s+\w+\s+as\b").expect("valid regex"));

static ALLITERATION_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,}").expect("valid regex"));

/// Complements too generic to make "X is Y" figurative.
const GENERIC_NOUNS: &[&str] = &[
    "man", "woman", "person", "thing", "animal", "human", "boy", "girl",
];

const LINKING_VERBS: &[&str] = &["is", "are"];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

const MIN_ALLITERATION_WORDS: usize = 3;

/// A sentence whose words repeat an initial consonant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alliteration {
    pub sentence: String,
    pub letter: char,
    /// Distinct words starting with `letter`, sorted.
    pub words: Vec<String>,
}

impl fmt::Display for Alliteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' (Words: {})", self.sentence, self.words.join(", "))
    }
}

/// Detected figures of speech, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureReport {
    /// Simile sentences in text order, repeats kept.
    pub similes: Vec<String>,
    /// Distinct metaphor sentences, sorted.
    pub metaphors: Vec<String>,
    /// Distinct alliterations, sorted by their display string.
    pub alliterations: Vec<Alliteration>,
}

impl FigureReport {
    pub fn is_empty(&self) -> bool {
        self.similes.is_empty() && self.metaphors.is_empty() && self.alliterations.is_empty()
    }
}

/// Flags similes, metaphors and alliteration per sentence.
#[derive(Clone, Copy, Debug, Default)]
pub struct FigureOfSpeechDetector {
    profile: DetectionProfile,
}

impl FigureOfSpeechDetector {
    pub fn new(profile: DetectionProfile) -> Self {
        FigureOfSpeechDetector { profile }
    }

    pub fn profile(&self) -> DetectionProfile {
        self.profile
    }

    /// Whether a sentence reads as a simile.
    pub fn is_simile(sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        let padded = format!(" {lower} ");
        if padded.contains(" as ") {
            AS_COMPARISON.is_match(&lower)
        } else {
            padded.contains(" like ")
        }
    }

    /// Whether a sentence uses ` as ` without an `as <word> as` comparison.
    pub fn has_bare_as(sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        format!(" {lower} ").contains(" as ") && !AS_COMPARISON.is_match(&lower)
    }

    /// Whether a tagged sentence contains a `noun is/are noun` pattern.
    pub fn is_metaphor(&self, tagged: &[TaggedToken]) -> bool {
        let skip_generic = self.profile.uses_generic_noun_stoplist();
        tagged.windows(3).any(|window| {
            let (subject, verb, complement) = (&window[0], &window[1], &window[2]);
            subject.is_noun()
                && LINKING_VERBS.contains(&verb.word.as_str())
                && complement.is_noun()
                && subject.word != complement.word
                && !(skip_generic && GENERIC_NOUNS.contains(&complement.word.as_str()))
        })
    }

    /// Find the first consonant shared by three or more distinct words.
    ///
    /// `words` must already be lowercase; words not starting with two ASCII
    /// lowercase letters are ignored. Groups are visited in the order their
    /// letter first appears.
    pub fn find_alliteration<S: AsRef<str>>(sentence: &str, words: &[S]) -> Option<Alliteration> {
        let clean: Vec<&str> = words
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| ALLITERATION_WORD.is_match(w))
            .collect();
        if clean.len() < MIN_ALLITERATION_WORDS {
            return None;
        }

        let mut groups: Vec<(char, BTreeSet<&str>)> = Vec::new();
        for word in clean {
            let Some(first) = word.chars().next() else {
                continue;
            };
            if VOWELS.contains(&first) {
                continue;
            }
            match groups.iter_mut().find(|(letter, _)| *letter == first) {
                Some((_, members)) => {
                    members.insert(word);
                }
                None => groups.push((first, BTreeSet::from([word]))),
            }
        }

        groups
            .into_iter()
            .find(|(_, members)| members.len() >= MIN_ALLITERATION_WORDS)
            .map(|(letter, members)| Alliteration {
                sentence: sentence.trim().to_string(),
                letter,
                words: members.into_iter().map(str::to_string).collect(),
            })
    }

    /// Run all three detectors over the given sentences.
    pub fn detect<S: AsRef<str>>(
        &self,
        sentences: &[S],
        tokenizer: &dyn Tokenizer,
        tagger: &dyn Tagger,
    ) -> Result<FigureReport> {
        let mut similes = Vec::new();
        let mut metaphors = BTreeSet::new();
        let mut alliterations = BTreeMap::new();

        for sentence in sentences {
            let sentence = sentence.as_ref();
            let trimmed = sentence.trim();

            if Self::has_bare_as(sentence) {
                log::trace!("Skipping bare 'as': {trimmed}");
                continue;
            }

            if Self::is_simile(sentence) {
                log::trace!("Simile: {trimmed}");
                similes.push(trimmed.to_string());
            }

            let lowered: Vec<String> = tokenizer
                .tokenize_words(&sentence.to_lowercase())?
                .into_iter()
                .map(|t| t.text)
                .collect();
            let surface: Vec<&str> = lowered.iter().map(String::as_str).collect();
            let tagged = tagger.tag(&surface)?;
            if tagged.len() != surface.len() {
                return Err(LitloomError::analysis_unavailable(format!(
                    "tagger returned {} tags for {} tokens",
                    tagged.len(),
                    surface.len()
                )));
            }

            if self.is_metaphor(&tagged) {
                log::trace!("Metaphor: {trimmed}");
                metaphors.insert(trimmed.to_string());
            }

            let alliteration = match self.profile {
                DetectionProfile::Interactive => Self::find_alliteration(sentence, &lowered),
                DetectionProfile::Export => {
                    // Only words already lowercase in the source qualify.
                    let original: Vec<String> = tokenizer
                        .tokenize_words(sentence)?
                        .into_iter()
                        .filter(|t| ALLITERATION_WORD.is_match(&t.text))
                        .map(|t| t.text.to_lowercase())
                        .collect();
                    Self::find_alliteration(sentence, &original)
                }
            };
            if let Some(alliteration) = alliteration {
                log::trace!("Alliteration on '{}': {trimmed}", alliteration.letter);
                alliterations.insert(alliteration.to_string(), alliteration);
            }
        }

        Ok(FigureReport {
            similes,
            metaphors: metaphors.into_iter().collect(),
            alliterations: alliterations.into_values().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    #[test]
    fn test_simile_like() {
        assert!(FigureOfSpeechDetector::is_simile("She sings like an angel."));
        assert!(FigureOfSpeechDetector::is_simile("Like a bird, she flew."));
        assert!(!FigureOfSpeechDetector::is_simile("She likes the angel."));
    }

    #[test]
    fn test_simile_as_comparison() {
        assert!(FigureOfSpeechDetector::is_simile("He is as tall as a tree."));
        assert!(FigureOfSpeechDetector::is_simile("AS COLD AS ice"));
        assert!(!FigureOfSpeechDetector::is_simile("He is as tall."));
        assert!(!FigureOfSpeechDetector::is_simile("I wandered lonely as a cloud"));
    }

    #[test]
    fn test_bare_as_overrides_like() {
        assert!(!FigureOfSpeechDetector::is_simile(
            "As night falls, she sings like an angel."
        ));
    }

    #[test]
    fn test_has_bare_as() {
        assert!(FigureOfSpeechDetector::has_bare_as("I wandered lonely as a cloud"));
        assert!(FigureOfSpeechDetector::has_bare_as("As pale petals pass, peace prevails."));
        assert!(!FigureOfSpeechDetector::has_bare_as("He is as tall as a tree."));
        assert!(!FigureOfSpeechDetector::has_bare_as("Peter Piper picked a peck."));
        assert!(!FigureOfSpeechDetector::has_bare_as("The ashes glow."));
    }

    #[test]
    fn test_metaphor_pattern() {
        let detector = FigureOfSpeechDetector::new(DetectionProfile::Interactive);
        assert!(detector.is_metaphor(&tagged(&[
            ("time", "NN"),
            ("is", "VBZ"),
            ("money", "NN")
        ])));
        assert!(detector.is_metaphor(&tagged(&[
            ("eyes", "NNS"),
            ("are", "VBP"),
            ("stars", "NNS")
        ])));
        // Same noun on both sides.
        assert!(!detector.is_metaphor(&tagged(&[
            ("war", "NN"),
            ("is", "VBZ"),
            ("war", "NN")
        ])));
        // Determiner breaks the triple.
        assert!(!detector.is_metaphor(&tagged(&[
            ("love", "NN"),
            ("is", "VBZ"),
            ("a", "DT"),
            ("rose", "NN")
        ])));
        // Linking verb must be "is" or "are".
        assert!(!detector.is_metaphor(&tagged(&[
            ("love", "NN"),
            ("was", "VBD"),
            ("fire", "NN")
        ])));
    }

    #[test]
    fn test_generic_noun_stoplist_by_profile() {
        let sentence = tagged(&[("he", "PRP"), ("love", "NN"), ("is", "VBZ"), ("thing", "NN")]);
        assert!(!FigureOfSpeechDetector::new(DetectionProfile::Interactive).is_metaphor(&sentence));
        assert!(FigureOfSpeechDetector::new(DetectionProfile::Export).is_metaphor(&sentence));
    }

    #[test]
    fn test_alliteration() {
        let words = [
            "peter", "piper", "picked", "a", "peck", "of", "pickled", "peppers", ".",
        ];
        let found = FigureOfSpeechDetector::find_alliteration(
            "Peter Piper picked a peck of pickled peppers.",
            &words,
        )
        .unwrap();
        assert_eq!(found.letter, 'p');
        assert_eq!(
            found.words,
            vec!["peck", "peppers", "peter", "picked", "pickled", "piper"]
        );
        assert_eq!(
            found.to_string(),
            "'Peter Piper picked a peck of pickled peppers.' \
             (Words: peck, peppers, peter, picked, pickled, piper)"
        );
    }

    #[test]
    fn test_alliteration_needs_distinct_words() {
        let words = ["sea", "sea", "sea", "sky"];
        assert!(FigureOfSpeechDetector::find_alliteration("x", &words).is_none());
    }

    #[test]
    fn test_alliteration_ignores_vowels_and_short_words() {
        assert!(
            FigureOfSpeechDetector::find_alliteration("x", &["apple", "ant", "axe", "bee"])
                .is_none()
        );
        assert!(FigureOfSpeechDetector::find_alliteration("x", &["b", "b2", "by"]).is_none());
    }

    #[test]
    fn test_alliteration_first_letter_in_order_of_appearance() {
        let words = ["soft", "wind", "sings", "while", "sun", "wanes", "west"];
        let found = FigureOfSpeechDetector::find_alliteration("x", &words).unwrap();
        assert_eq!(found.letter, 's');
        assert_eq!(found.words, vec!["sings", "soft", "sun"]);
    }
}
