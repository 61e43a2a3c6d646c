//! Word lists for spell checking.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Lowercase words and their frequencies.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: HashMap<String, u32>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frequency of a word, replacing any previous value.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Increment the frequency of a word by 1.
    pub fn increment_word(&mut self, word: &str) {
        *self.words.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    /// Check if a word exists in the dictionary. Case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Frequency of a word, 0 when unknown.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Iterate over words and frequencies in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.words.iter().map(|(w, f)| (w.as_str(), *f))
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Merge another dictionary into this one, summing frequencies.
    pub fn merge(&mut self, other: &SpellingDictionary) {
        for (word, frequency) in &other.words {
            *self.words.entry(word.clone()).or_insert(0) += frequency;
        }
    }

    /// Load a word list with one word per line. Repeated lines raise the
    /// word's frequency; lines that are not purely alphabetic are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut dictionary = SpellingDictionary::new();
        let reader = BufReader::new(File::open(path)?);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() && word.chars().all(char::is_alphabetic) {
                dictionary.increment_word(word);
            }
        }

        log::debug!(
            "Loaded {} words from {}",
            dictionary.word_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Load a frequency file with `word frequency` per line. Malformed lines
    /// are skipped.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut dictionary = SpellingDictionary::new();
        let reader = BufReader::new(File::open(path)?);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let (Some(word), Some(frequency)) = (parts.next(), parts.next()) else {
                continue;
            };
            if let Ok(frequency) = frequency.parse::<u32>()
                && word.chars().all(char::is_alphabetic)
            {
                dictionary.add_word(word, frequency);
            } else {
                log::warn!("Skipping line {} of {}: {line:?}", number + 1, path.display());
            }
        }

        log::debug!(
            "Loaded {} words from {}",
            dictionary.word_count(),
            path.display()
        );
        Ok(dictionary)
    }

    /// A small built-in English list, weighted by rank.
    pub fn english() -> Self {
        let mut dictionary = SpellingDictionary::new();
        let count = ENGLISH_WORDS.len() as u32;
        for (rank, word) in ENGLISH_WORDS.iter().enumerate() {
            // Earlier entries are more frequent; a repeat keeps its first rank.
            dictionary
                .words
                .entry((*word).to_string())
                .or_insert((count - rank as u32) * 10);
        }
        dictionary
    }
}

/// Common English words, most frequent first, with a bias towards verse.
const ENGLISH_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
    "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    "what", "so", "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make",
    "can", "like", "time", "no", "just", "him", "know", "take", "is", "was", "are", "were",
    "been", "has", "had", "did", "does", "said", "people", "into", "year", "your", "good",
    "some", "could", "them", "see", "other", "than", "then", "now", "look", "only", "come",
    "its", "over", "think", "also", "back", "after", "use", "two", "how", "our", "work",
    "first", "well", "way", "even", "new", "want", "because", "any", "these", "give", "day",
    "most", "us", "each", "where", "made", "find", "home", "here", "should", "never", "those",
    "came", "may", "such", "every", "through", "still", "before", "long", "down", "far",
    "once", "both", "same", "really", "perhaps", "though", "while", "why", "let", "am",
    "shall", "upon", "must", "might", "yet", "nor", "o", "er", "oh", "thee", "thou", "thy",
    "thine", "art", "hath", "doth", "ere", "life", "love", "heart", "night", "light", "world",
    "hand", "eyes", "eye", "face", "house", "water", "place", "word", "words", "sun", "moon",
    "star", "stars", "sky", "sea", "wind", "rain", "snow", "fire", "earth", "air", "land",
    "field", "fields", "hill", "hills", "vale", "vales", "valley", "mountain", "river", "stream",
    "tree", "trees", "wood", "woods", "forest", "leaf", "leaves", "flower", "flowers", "rose",
    "roses", "lily", "daffodil", "daffodils", "violet", "violets", "grass", "grassy", "road",
    "roads", "path", "way", "bird", "birds", "song", "songs", "voice", "soul", "spirit", "god",
    "dream", "dreams", "death", "grave", "sleep", "morning", "evening", "day", "days", "hour",
    "spring", "summer", "autumn", "winter", "storm", "cloud", "clouds", "crowd", "host", "worm",
    "bed", "joy", "sorrow", "grief", "pain", "hope", "fear", "peace", "war", "king", "queen",
    "man", "woman", "child", "friend", "mother", "father", "sister", "brother", "angel",
    "secret", "dark", "bright", "golden", "silver", "crimson", "yellow", "green", "blue", "red",
    "white", "black", "sweet", "sick", "cold", "warm", "soft", "wild", "lonely", "alone",
    "invisible", "high", "low", "deep", "fair", "sorry", "better", "best", "old", "young",
    "little", "great", "last", "whole", "same", "other", "own", "true", "free", "full",
    "flies", "fly", "found", "find", "destroy", "destroys", "wandered", "wander", "floats",
    "float", "saw", "seen", "diverged", "travel", "traveler", "stood", "stand", "looked",
    "bent", "bend", "undergrowth", "took", "having", "claim", "wanted", "wear", "passing",
    "pass", "worn", "howling", "howl", "sing", "sings", "sang", "dance", "dancing", "fall",
    "falls", "fell", "rise", "rose", "walk", "walked", "run", "ran", "weep", "wept", "live",
    "lived", "die", "died", "dying", "breathe", "hold", "held", "keep", "kept", "leave", "left",
    "lay", "lie", "lies", "rest", "turn", "turned", "call", "called", "hear", "heard", "feel",
    "felt", "speak", "spoke", "tell", "told", "remember", "forget", "grow", "grew", "shine",
    "shone", "burn", "burning", "tall", "tree", "money", "peck", "picked", "pickled",
    "peppers", "piper", "bad", "big", "bears", "cat", "mat", "rat", "sat",
];

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = SpellingDictionary::new();
        assert!(dict.is_empty());
        assert!(!dict.contains("storm"));
        assert_eq!(dict.frequency("storm"), 0);

        dict.add_word("storm", 5);
        assert!(dict.contains("storm"));
        assert_eq!(dict.frequency("storm"), 5);

        dict.increment_word("storm");
        assert_eq!(dict.frequency("storm"), 6);
        assert_eq!(dict.word_count(), 1);
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let mut dict = SpellingDictionary::new();
        dict.add_word("Rose", 5);
        assert!(dict.contains("rose"));
        assert!(dict.contains("ROSE"));
        dict.increment_word("ROSE");
        assert_eq!(dict.frequency("rose"), 6);
    }

    #[test]
    fn test_merge_dictionaries() {
        let mut first = SpellingDictionary::new();
        first.add_word("worm", 5);
        first.add_word("storm", 3);

        let mut second = SpellingDictionary::new();
        second.add_word("worm", 2);
        second.add_word("joy", 4);

        first.merge(&second);
        assert_eq!(first.frequency("worm"), 7);
        assert_eq!(first.frequency("storm"), 3);
        assert_eq!(first.frequency("joy"), 4);
        assert_eq!(first.word_count(), 3);
    }

    #[test]
    fn test_load_from_word_list() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cloud").unwrap();
        writeln!(file, "  crowd  ").unwrap();
        writeln!(file, "cloud").unwrap();
        writeln!(file, "o'er").unwrap();
        writeln!(file).unwrap();
        file.flush().unwrap();

        let dict = SpellingDictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.frequency("cloud"), 2);
        assert_eq!(dict.frequency("crowd"), 1);
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn test_load_from_frequency_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "night 120").unwrap();
        writeln!(file, "light 80").unwrap();
        writeln!(file, "broken").unwrap();
        writeln!(file, "bad x").unwrap();
        file.flush().unwrap();

        let dict = SpellingDictionary::load_from_frequency_file(file.path()).unwrap();
        assert_eq!(dict.frequency("night"), 120);
        assert_eq!(dict.frequency("light"), 80);
        assert_eq!(dict.word_count(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SpellingDictionary::load_from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(crate::error::LitloomError::Io(_))));
    }

    #[test]
    fn test_english_ranks() {
        let dict = SpellingDictionary::english();
        assert!(dict.contains("the"));
        assert!(dict.contains("daffodils"));
        assert!(!dict.contains("nyght"));
        assert!(dict.frequency("the") > dict.frequency("night"));
    }
}
