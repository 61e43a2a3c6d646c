//! Rhyme scheme detection.
//!
//! Every line contributes its last word (punctuation removed, lowercased).
//! Two end words rhyme when both are longer than two characters and share
//! their final three characters. Labels are handed out greedily: a new word
//! takes the label of the *first* earlier end word it rhymes with, or the
//! next unused letter. Words of two characters or fewer never rhyme, so
//! each distinct short word gets its own label.
//!
//! # Examples
//!
//! ```
//! use litloom::poetry::rhyme::RhymeAnalyzer;
//!
//! let analysis = RhymeAnalyzer::new().analyze(&["The cat sat", "On the mat", "Not a rat"]);
//! assert_eq!(analysis.scheme, "AAA");
//! assert_eq!(analysis.groups[0].words, vec!["cat", "mat", "rat"]);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Characters removed from end words: anything that is neither a word
/// character nor whitespace.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Number of trailing characters compared between end words.
const RHYME_SUFFIX_LEN: usize = 3;

const FIRST_LABEL: char = 'A';

/// End words sharing one rhyme label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeGroup {
    pub label: char,
    /// Distinct end words, sorted.
    pub words: Vec<String>,
}

impl RhymeGroup {
    /// Whether at least two different words share the label.
    pub fn is_rhyme(&self) -> bool {
        self.words.len() >= 2
    }
}

/// Result of rhyme analysis over a poem's lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeAnalysis {
    /// One label per line that has at least one word.
    pub scheme: String,
    /// One group per label, in label order. Singletons included.
    pub groups: Vec<RhymeGroup>,
}

impl RhymeAnalysis {
    /// Groups with two or more words.
    pub fn rhyming_groups(&self) -> impl Iterator<Item = &RhymeGroup> {
        self.groups.iter().filter(|g| g.is_rhyme())
    }

    pub fn has_rhymes(&self) -> bool {
        self.groups.iter().any(RhymeGroup::is_rhyme)
    }
}

/// Derives rhyme schemes from poem lines. Stateless.
#[derive(Clone, Debug, Default)]
pub struct RhymeAnalyzer;

impl RhymeAnalyzer {
    pub fn new() -> Self {
        RhymeAnalyzer
    }

    /// The normalized end word of a line, or `None` for a line without words.
    ///
    /// The result may be empty when the last token is pure punctuation
    /// (e.g. a trailing dash); such a line still takes part in the scheme.
    pub fn end_word(line: &str) -> Option<String> {
        let last = line.split_whitespace().last()?;
        Some(NON_WORD.replace_all(last, "").to_lowercase())
    }

    /// Whether two end words rhyme under the suffix rule.
    pub fn rhymes(a: &str, b: &str) -> bool {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.len() < RHYME_SUFFIX_LEN || b.len() < RHYME_SUFFIX_LEN {
            return false;
        }
        a[a.len() - RHYME_SUFFIX_LEN..] == b[b.len() - RHYME_SUFFIX_LEN..]
    }

    /// Compute the rhyme scheme and rhyme groups for the given lines.
    pub fn analyze<S: AsRef<str>>(&self, lines: &[S]) -> RhymeAnalysis {
        let end_words: Vec<String> = lines
            .iter()
            .filter_map(|line| Self::end_word(line.as_ref()))
            .collect();
        if end_words.is_empty() {
            return RhymeAnalysis::default();
        }

        let mut labels: HashMap<&str, char> = HashMap::new();
        let mut next_label = FIRST_LABEL as u32;

        for (i, word) in end_words.iter().enumerate() {
            if labels.contains_key(word.as_str()) {
                continue;
            }

            let earlier_label = end_words[..i]
                .iter()
                .find(|previous| Self::rhymes(word, previous))
                .and_then(|previous| labels.get(previous.as_str()).copied());

            let label = match earlier_label {
                Some(label) => label,
                None => {
                    let label = label_from(next_label);
                    next_label += 1;
                    label
                }
            };
            labels.insert(word.as_str(), label);
        }

        let scheme: String = end_words
            .iter()
            .filter_map(|w| labels.get(w.as_str()))
            .collect();

        let mut by_label: BTreeMap<char, BTreeSet<String>> = BTreeMap::new();
        for (word, label) in &labels {
            by_label.entry(*label).or_default().insert((*word).to_string());
        }
        let groups = by_label
            .into_iter()
            .map(|(label, words)| RhymeGroup {
                label,
                words: words.into_iter().collect(),
            })
            .collect();

        RhymeAnalysis { scheme, groups }
    }
}

/// Labels continue past `Z` through the following code points.
fn label_from(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(lines: &[&str]) -> RhymeAnalysis {
        RhymeAnalyzer::new().analyze(lines)
    }

    #[test]
    fn test_shared_suffix() {
        let analysis = analyze(&["The cat sat", "On the mat", "Not a rat"]);
        assert_eq!(analysis.scheme, "AAA");
        assert_eq!(analysis.groups.len(), 1);
        assert_eq!(analysis.groups[0].label, 'A');
        assert_eq!(analysis.groups[0].words, vec!["cat", "mat", "rat"]);
    }

    #[test]
    fn test_no_rhymes() {
        let analysis = analyze(&["one", "two", "three"]);
        assert_eq!(analysis.scheme, "ABC");
        assert_eq!(analysis.groups.len(), 3);
        assert!(analysis.groups.iter().all(|g| g.words.len() == 1));
        assert!(!analysis.has_rhymes());
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(analyze(&empty), RhymeAnalysis::default());
        assert_eq!(analyze(&["", "   "]), RhymeAnalysis::default());
    }

    #[test]
    fn test_trailing_punctuation_ignored() {
        let analysis = analyze(&["I saw a cat.", "It was a cat"]);
        assert_eq!(analysis.scheme, "AA");
        assert_eq!(analysis.groups[0].words, vec!["cat"]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let analysis = analyze(&["a night", "", "   ", "the light"]);
        assert_eq!(analysis.scheme, "AA");
    }

    #[test]
    fn test_short_words_never_rhyme() {
        let analysis = analyze(&["go", "so", "no"]);
        assert_eq!(analysis.scheme, "ABC");
    }

    #[test]
    fn test_partial_rhyme() {
        let analysis = analyze(&[
            "The rose is sick. Invisible worm,",
            "That flies in the nyght, in the howling storm,",
            "Has found out thy bed of crimson joy,",
            "And his dark secret love does thy life destroy.",
        ]);
        // "joy" and "destroy" end in "joy" and "roy": no rhyme.
        assert_eq!(analysis.scheme, "AABC");
        let rhyming: Vec<_> = analysis.rhyming_groups().collect();
        assert_eq!(rhyming.len(), 1);
        assert_eq!(rhyming[0].words, vec!["storm", "worm"]);
    }

    #[test]
    fn test_label_taken_from_earlier_line() {
        let analysis = analyze(&["sing", "cloud", "bring", "proud", "ring"]);
        assert_eq!(analysis.scheme, "ABABA");
        assert_eq!(analysis.groups[0].words, vec!["bring", "ring", "sing"]);
        assert_eq!(analysis.groups[1].words, vec!["cloud", "proud"]);
    }

    #[test]
    fn test_repeated_word_keeps_label() {
        let analysis = analyze(&["day", "night", "day"]);
        assert_eq!(analysis.scheme, "ABA");
        assert_eq!(analysis.groups[0].words, vec!["day"]);
    }

    #[test]
    fn test_labels_continue_after_z() {
        let lines: Vec<String> = (0..28).map(|i| format!("line{i:02}x")).collect();
        let analysis = RhymeAnalyzer::new().analyze(&lines);
        assert_eq!(analysis.scheme.chars().count(), 28);
        assert_eq!(analysis.scheme.chars().nth(25), Some('Z'));
        assert_eq!(analysis.scheme.chars().nth(26), Some('['));
    }
}
