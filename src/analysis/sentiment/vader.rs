//! VADER-style lexicon sentiment scorer.
//!
//! Each word gets a valence from a built-in lexicon, adjusted by nearby
//! booster words, negations, capitalization emphasis and the "but" rule.
//! Punctuation emphasis (`!`, `?`) pushes the total away from zero. The sum
//! is squashed into `[-1, 1]` with `x / sqrt(x^2 + 15)`.
//!
//! # Examples
//!
//! ```
//! use litloom::analysis::sentiment::{SentimentScorer, VaderScorer};
//!
//! let scorer = VaderScorer::new();
//! let scores = scorer.score("I love this bright morning").unwrap();
//! assert!(scores.compound > 0.05);
//!
//! let scores = scorer.score("I do not love this").unwrap();
//! assert!(scores.compound < 0.0);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::analysis::sentiment::{SentimentScorer, SentimentScores};
use crate::error::Result;

const BOOSTER_INCREMENT: f64 = 0.293;
const BOOSTER_DECREMENT: f64 = -0.293;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_STEP: f64 = 0.292;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

/// Word valences on a -4..=4 scale.
const LEXICON: &[(&str, f64)] = &[
    ("love", 3.2), ("loved", 2.9), ("loves", 2.7), ("lovely", 2.8), ("loving", 2.9),
    ("joy", 2.8), ("joyful", 2.9), ("happy", 2.7), ("happiness", 2.6), ("hope", 1.9),
    ("hopeful", 2.3), ("good", 1.9), ("great", 3.1), ("beautiful", 2.9), ("beauty", 2.8),
    ("sweet", 2.0), ("bright", 1.9), ("golden", 1.4), ("glad", 2.0), ("smile", 1.5),
    ("smiles", 1.5), ("laugh", 2.6), ("laughter", 2.2), ("delight", 2.9),
    ("peace", 2.5), ("peaceful", 2.2), ("calm", 1.3), ("gentle", 1.4), ("kind", 2.4),
    ("warm", 0.9), ("free", 2.3), ("freedom", 3.2), ("bliss", 2.7), ("heaven", 2.6),
    ("angel", 2.2), ("grace", 1.8), ("faith", 1.8), ("true", 2.0), ("truth", 1.3),
    ("wonder", 1.7), ("wonderful", 2.7), ("fair", 1.3), ("dear", 1.6), ("darling", 2.7),
    ("best", 3.2), ("better", 1.9), ("fine", 0.8), ("pleasure", 2.7), ("pretty", 2.2),
    ("excellent", 3.2), ("amazing", 2.8), ("fantastic", 2.6), ("win", 2.8), ("won", 2.7),
    ("success", 2.7), ("comfort", 1.5), ("friend", 2.2), ("friends", 2.1), ("thanks", 1.9),
    ("blessed", 2.9), ("sunshine", 2.2), ("treasure", 1.2), ("safe", 1.9), ("strong", 2.3),
    ("like", 1.5), ("want", 0.3), ("yes", 1.7), ("alive", 1.6), ("alright", 1.0),
    ("sad", -2.1), ("sadness", -1.9), ("sorrow", -2.4), ("sorry", -0.3), ("grief", -2.2),
    ("pain", -2.3), ("hurt", -2.4), ("cry", -2.1), ("tears", -0.9), ("weep", -2.7),
    ("death", -2.9), ("dead", -3.3), ("die", -2.9), ("dying", -2.3), ("kill", -3.7),
    ("hate", -2.7), ("hatred", -3.2), ("anger", -2.7), ("angry", -2.3), ("rage", -2.6),
    ("fear", -2.2), ("afraid", -2.2), ("despair", -2.8), ("lonely", -1.8), ("alone", -1.0),
    ("dark", -1.4), ("darkness", -1.0), ("cold", -0.3), ("bitter", -1.8), ("cruel", -2.8),
    ("sick", -2.3), ("ill", -1.9), ("destroy", -2.5), ("destroyed", -3.0), ("ruin", -2.8),
    ("lost", -1.3), ("lose", -1.6), ("loss", -1.3), ("bad", -2.5), ("worse", -2.1),
    ("worst", -3.1), ("terrible", -2.1), ("horrible", -2.5), ("awful", -2.0),
    ("broken", -1.6), ("wrong", -2.1), ("fail", -2.5), ("failure", -2.3), ("war", -2.9),
    ("storm", -0.5), ("howling", -0.9), ("wept", -2.0), ("mourn", -1.8), ("grave", -1.6),
    ("doom", -1.7), ("misery", -2.7), ("miserable", -2.2), ("weary", -1.1), ("tired", -1.9),
    ("shame", -2.1), ("guilt", -1.1), ("evil", -3.4), ("poison", -2.5), ("wound", -2.0),
    ("worry", -1.9), ("fright", -1.6), ("gloom", -2.6), ("gloomy", -0.6), ("no", -1.2),
    ("ugly", -2.3), ("stupid", -2.4), ("problem", -1.7), ("trouble", -1.7), ("hell", -3.6),
];

/// Words that intensify (positive) or dampen (negative) the next sentiment word.
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT), ("amazingly", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT), ("deeply", BOOSTER_INCREMENT),
    ("enormously", BOOSTER_INCREMENT), ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT), ("extremely", BOOSTER_INCREMENT),
    ("greatly", BOOSTER_INCREMENT), ("highly", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT), ("most", BOOSTER_INCREMENT), ("more", BOOSTER_INCREMENT),
    ("purely", BOOSTER_INCREMENT), ("quite", BOOSTER_INCREMENT), ("really", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT), ("too", BOOSTER_INCREMENT), ("totally", BOOSTER_INCREMENT),
    ("truly", BOOSTER_INCREMENT), ("utterly", BOOSTER_INCREMENT), ("very", BOOSTER_INCREMENT),
    ("barely", BOOSTER_DECREMENT), ("hardly", BOOSTER_DECREMENT),
    ("less", BOOSTER_DECREMENT), ("little", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT), ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT), ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
];

const NEGATIONS: &[&str] = &[
    "not", "never", "no", "nothing", "nowhere", "none", "nor", "neither", "cannot",
    "without", "nobody", "ain't", "aint", "n't",
];

static LEXICON_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());

static BOOSTER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

static NEGATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());

/// Built-in lexicon scorer. Stateless and shareable across threads.
#[derive(Clone, Debug, Default)]
pub struct VaderScorer;

impl VaderScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        VaderScorer
    }

    /// Whitespace split with surrounding punctuation stripped.
    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .map(|w| w.trim_matches('\''))
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn is_all_caps(word: &str) -> bool {
        word.chars().any(char::is_alphabetic)
            && word
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase)
    }

    /// Some, but not all, words are written in capitals.
    fn has_caps_differential(words: &[&str]) -> bool {
        let caps = words.iter().filter(|w| Self::is_all_caps(w)).count();
        caps > 0 && caps < words.len()
    }

    fn is_negation(word: &str) -> bool {
        let lower = word.to_lowercase().replace('\u{2019}', "'");
        NEGATION_SET.contains(lower.as_str()) || lower.ends_with("n't")
    }

    fn booster_scalar(word: &str, valence: f64, caps_differential: bool) -> f64 {
        let lower = word.to_lowercase();
        let Some(&base) = BOOSTER_MAP.get(lower.as_str()) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if caps_differential && Self::is_all_caps(word) {
            scalar += if valence > 0.0 {
                CAPS_INCREMENT
            } else {
                -CAPS_INCREMENT
            };
        }
        scalar
    }

    fn word_valence(words: &[&str], i: usize, caps_differential: bool) -> f64 {
        let word = words[i];
        let lower = word.to_lowercase();

        if BOOSTER_MAP.contains_key(lower.as_str()) {
            return 0.0;
        }
        let Some(&base) = LEXICON_MAP.get(lower.as_str()) else {
            return 0.0;
        };

        let mut valence = base;
        if caps_differential && Self::is_all_caps(word) {
            valence += if valence > 0.0 {
                CAPS_INCREMENT
            } else {
                -CAPS_INCREMENT
            };
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let previous = words[i - distance];
            if LEXICON_MAP.contains_key(previous.to_lowercase().as_str()) {
                continue;
            }
            let mut scalar = Self::booster_scalar(previous, valence, caps_differential);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;

            if Self::is_negation(previous) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    /// Dampen sentiment before "but" and amplify it after.
    fn apply_but_rule(words: &[&str], sentiments: &mut [f64]) {
        let Some(but_index) = words.iter().position(|w| w.eq_ignore_ascii_case("but")) else {
            return;
        };
        for (i, sentiment) in sentiments.iter_mut().enumerate() {
            if i < but_index {
                *sentiment *= 0.5;
            } else if i > but_index {
                *sentiment *= 1.5;
            }
        }
    }

    fn punctuation_emphasis(text: &str) -> f64 {
        let exclamations = text.matches('!').count().min(4) as f64;
        let questions = text.matches('?').count();
        let question_emphasis = match questions {
            0 | 1 => 0.0,
            2..=3 => questions as f64 * QUESTION_STEP,
            _ => QUESTION_CAP,
        };
        exclamations * EXCLAMATION_STEP + question_emphasis
    }

    fn normalize(score: f64) -> f64 {
        let normalized = score / (score * score + NORMALIZATION_ALPHA).sqrt();
        normalized.clamp(-1.0, 1.0)
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        let words = Self::words(text);
        if words.is_empty() {
            return Ok(SentimentScores::default());
        }

        let caps_differential = Self::has_caps_differential(&words);
        let mut sentiments: Vec<f64> = (0..words.len())
            .map(|i| Self::word_valence(&words, i, caps_differential))
            .collect();
        Self::apply_but_rule(&words, &mut sentiments);

        let emphasis = Self::punctuation_emphasis(text);
        let mut total: f64 = sentiments.iter().sum();
        if total > 0.0 {
            total += emphasis;
        } else if total < 0.0 {
            total -= emphasis;
        }
        let compound = Self::normalize(total);

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        for &s in &sentiments {
            if s > 0.0 {
                positive_sum += s + 1.0;
            } else if s < 0.0 {
                negative_sum += s - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }
        if positive_sum > negative_sum.abs() {
            positive_sum += emphasis;
        } else if positive_sum < negative_sum.abs() {
            negative_sum -= emphasis;
        }

        let mass = positive_sum + negative_sum.abs() + neutral_count;
        let scores = SentimentScores::new(
            (positive_sum / mass).abs(),
            (neutral_count / mass).abs(),
            (negative_sum / mass).abs(),
            compound,
        );
        log::trace!("Scored {} words: {:?}", words.len(), scores);
        Ok(scores)
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}
