//! Unicode tokenizer implementation.
//!
//! Words follow the Unicode word boundary rules (UAX #29) with a few
//! Treebank-style adjustments: punctuation marks become their own tokens,
//! clitics are split off (`don't` -> `do` + `n't`, `cat's` -> `cat` + `'s`)
//! and runs of periods collapse into one token.
//!
//! Sentences follow the Unicode sentence boundary rules, except that a
//! segment which does not end in terminal punctuation is joined to the next
//! one. Poems break lines freely, and a bare line break must not end a
//! sentence.
//!
//! # Examples
//!
//! ```
//! use litloom::analysis::tokenizer::Tokenizer;
//! use litloom::analysis::tokenizer::unicode::UnicodeTokenizer;
//!
//! let tokenizer = UnicodeTokenizer::new();
//! let sentences = tokenizer
//!     .tokenize_sentences("I wandered lonely\nas a cloud. It rained!")
//!     .unwrap();
//! assert_eq!(sentences, vec!["I wandered lonely\nas a cloud.", "It rained!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Clitics split off the end of a word, compared case-insensitively.
const CLITIC_SUFFIXES: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

const CLOSING_MARKS: &[char] = &['"', '\'', ')', ']', '}', '\u{2019}', '\u{201D}', '\u{00BB}'];

const TERMINAL_MARKS: &[char] = &['.', '!', '?', '\u{2026}'];

/// The built-in word and sentence tokenizer.
///
/// It is stateless, so a single instance can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    /// Create a new Unicode tokenizer.
    pub fn new() -> Self {
        UnicodeTokenizer
    }

    fn is_apostrophe(c: char) -> bool {
        c == '\'' || c == '\u{2019}'
    }

    /// Byte index at which a clitic should be split off, if any.
    fn clitic_split(word: &str) -> Option<usize> {
        let (apos, apos_char) = word
            .char_indices()
            .filter(|(_, c)| Self::is_apostrophe(*c))
            .last()?;
        let after = word[apos + apos_char.len_utf8()..].to_lowercase();

        if after == "t" {
            // n't: split before the 'n', but only if something precedes it.
            let (n_idx, n_char) = word[..apos].char_indices().last()?;
            if (n_char == 'n' || n_char == 'N') && n_idx > 0 {
                return Some(n_idx);
            }
            return None;
        }

        if apos > 0 && CLITIC_SUFFIXES.contains(&after.as_str()) {
            return Some(apos);
        }
        None
    }

    fn ends_sentence(segment: &str) -> bool {
        segment
            .trim_end()
            .trim_end_matches(CLOSING_MARKS)
            .ends_with(TERMINAL_MARKS)
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize_words(&self, text: &str) -> Result<Vec<Token>> {
        let mut pieces: Vec<(usize, usize)> = Vec::new();

        for (start, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }
            let end = start + segment.len();

            if segment == "."
                && let Some(last) = pieces.last_mut()
                && last.1 == start
                && text[last.0..last.1].chars().all(|c| c == '.')
            {
                last.1 = end;
                continue;
            }

            match Self::clitic_split(segment) {
                Some(split) => {
                    pieces.push((start, start + split));
                    pieces.push((start + split, end));
                }
                None => pieces.push((start, end)),
            }
        }

        let tokens = pieces
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                Token::with_offsets(&text[start..end], position, start, end)
            })
            .collect();

        Ok(tokens)
    }

    fn tokenize_sentences(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut pending = String::new();

        for segment in text.split_sentence_bounds() {
            pending.push_str(segment);
            if Self::ends_sentence(&pending) {
                let sentence = pending.trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                pending.clear();
            }
        }

        let rest = pending.trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }

        Ok(sentences)
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        UnicodeTokenizer::new()
            .tokenize_words(text)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            words("The cat sat, on the mat."),
            vec!["The", "cat", "sat", ",", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(words("don't"), vec!["do", "n't"]);
        assert_eq!(words("can't"), vec!["ca", "n't"]);
        assert_eq!(words("the cat's bed"), vec!["the", "cat", "'s", "bed"]);
        assert_eq!(words("we're"), vec!["we", "'re"]);
        assert_eq!(words("o'er"), vec!["o'er"]);
    }

    #[test]
    fn test_ellipsis_collapses() {
        assert_eq!(words("and then..."), vec!["and", "then", "..."]);
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokens = UnicodeTokenizer::new().tokenize_words("Hi, you").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, ",");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].start_offset, 4);
        assert_eq!(tokens[2].end_offset, 7);
    }

    #[test]
    fn test_empty_input() {
        assert!(words("   \n ").is_empty());
        let sentences = UnicodeTokenizer::new().tokenize_sentences("  ").unwrap();
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_line_breaks_do_not_end_sentences() {
        let sentences = UnicodeTokenizer::new()
            .tokenize_sentences("Roses are red\nViolets are blue.\nSugar is sweet")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["Roses are red\nViolets are blue.", "Sugar is sweet"]
        );
    }

    #[test]
    fn test_sentence_terminators() {
        let sentences = UnicodeTokenizer::new()
            .tokenize_sentences("She sings like an angel. Why? \"Because!\" He left.")
            .unwrap();
        assert_eq!(
            sentences,
            vec!["She sings like an angel.", "Why?", "\"Because!\"", "He left."]
        );
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(UnicodeTokenizer::new().name(), "unicode");
    }
}
