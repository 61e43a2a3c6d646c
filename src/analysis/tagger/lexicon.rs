//! Lexicon and rule based tagger.
//!
//! Tagging happens in three passes over the token sequence:
//!
//! 1. Lexical lookup: punctuation, numbers, clitics, the closed-class
//!    lexicon and a small open-class lexicon of common (mostly poetic) words.
//! 2. Guessing for unknown words: capitalised words inside a sentence are
//!    proper nouns, then suffix rules, then `NN`.
//! 3. Contextual repair: base-form verbs after `to` and modals, nouns after
//!    determiners, past participles after auxiliaries.
//!
//! # Examples
//!
//! ```
//! use litloom::analysis::tagger::Tagger;
//! use litloom::analysis::tagger::lexicon::LexiconTagger;
//!
//! let tagger = LexiconTagger::new();
//! let tags: Vec<_> = tagger
//!     .tag(&["time", "is", "money"])
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.tag)
//!     .collect();
//! assert_eq!(tags, vec!["NN", "VBZ", "NN"]);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::analysis::tagger::Tagger;
use crate::analysis::token::TaggedToken;
use crate::error::Result;

/// Function words and other closed-class entries.
const CLOSED_CLASS: &[(&str, &str)] = &[
    // determiners
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"), ("some", "DT"),
    ("any", "DT"), ("no", "DT"), ("another", "DT"), ("either", "DT"), ("neither", "DT"),
    ("all", "DT"), ("both", "DT"), ("thy", "PRP$"), ("thine", "PRP$"),
    ("half", "PDT"), ("such", "PDT"),
    // pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("him", "PRP"),
    ("she", "PRP"), ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"),
    ("them", "PRP"), ("thou", "PRP"), ("thee", "PRP"), ("ye", "PRP"),
    ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"), ("herself", "PRP"),
    ("itself", "PRP"), ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("her", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    // wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"), ("which", "WDT"),
    ("whatever", "WDT"), ("where", "WRB"), ("when", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("whence", "WRB"), ("wherefore", "WRB"),
    // conjunctions
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    ("plus", "CC"),
    // prepositions and subordinating conjunctions
    ("in", "IN"), ("on", "IN"), ("at", "IN"), ("of", "IN"), ("for", "IN"), ("with", "IN"),
    ("by", "IN"), ("from", "IN"), ("into", "IN"), ("onto", "IN"), ("upon", "IN"),
    ("over", "IN"), ("under", "IN"), ("above", "IN"), ("below", "IN"), ("beneath", "IN"),
    ("between", "IN"), ("among", "IN"), ("through", "IN"), ("across", "IN"),
    ("against", "IN"), ("along", "IN"), ("around", "IN"), ("behind", "IN"),
    ("beside", "IN"), ("beyond", "IN"), ("during", "IN"), ("within", "IN"),
    ("without", "IN"), ("toward", "IN"), ("towards", "IN"), ("after", "IN"),
    ("before", "IN"), ("until", "IN"), ("till", "IN"), ("since", "IN"), ("as", "IN"),
    ("like", "IN"), ("than", "IN"), ("if", "IN"), ("because", "IN"), ("though", "IN"),
    ("although", "IN"), ("while", "IN"), ("whether", "IN"), ("unless", "IN"),
    ("o'er", "IN"), ("amid", "IN"), ("near", "IN"), ("about", "IN"),
    // particles, existentials, interjections
    ("to", "TO"), ("there", "EX"), ("oh", "UH"), ("o", "UH"), ("ah", "UH"),
    ("alas", "UH"), ("hello", "UH"), ("yes", "UH"), ("farewell", "UH"),
    // modals
    ("can", "MD"), ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"),
    ("shall", "MD"), ("should", "MD"), ("will", "MD"), ("would", "MD"), ("ca", "MD"),
    ("wo", "MD"), ("shalt", "MD"), ("wilt", "MD"), ("canst", "MD"),
    // be / have / do
    ("is", "VBZ"), ("are", "VBP"), ("am", "VBP"), ("was", "VBD"), ("were", "VBD"),
    ("be", "VB"), ("been", "VBN"), ("being", "VBG"), ("art", "VBP"), ("wert", "VBD"),
    ("has", "VBZ"), ("have", "VBP"), ("had", "VBD"), ("having", "VBG"), ("hath", "VBZ"),
    ("does", "VBZ"), ("do", "VBP"), ("did", "VBD"), ("doth", "VBZ"), ("done", "VBN"),
    // adverbs that do not end in -ly
    ("not", "RB"), ("never", "RB"), ("ever", "RB"), ("very", "RB"), ("too", "RB"),
    ("so", "RB"), ("then", "RB"), ("now", "RB"), ("here", "RB"), ("still", "RB"),
    ("again", "RB"), ("always", "RB"), ("often", "RB"), ("soon", "RB"), ("once", "RB"),
    ("just", "RB"), ("only", "RB"), ("also", "RB"), ("perhaps", "RB"), ("away", "RB"),
    ("down", "RP"), ("up", "RP"), ("out", "RP"), ("off", "RP"), ("back", "RB"),
    ("forth", "RB"), ("alone", "RB"), ("almost", "RB"), ("even", "RB"), ("far", "RB"),
    ("long", "RB"), ("more", "RBR"), ("less", "RBR"), ("most", "RBS"), ("least", "RBS"),
    ("better", "JJR"), ("best", "JJS"), ("worse", "JJR"), ("worst", "JJS"),
    // numbers
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"), ("five", "CD"),
    ("six", "CD"), ("seven", "CD"), ("eight", "CD"), ("nine", "CD"), ("ten", "CD"),
    ("hundred", "CD"), ("thousand", "CD"), ("million", "CD"),
    ("other", "JJ"), ("own", "JJ"), ("same", "JJ"), ("many", "JJ"), ("few", "JJ"),
    ("much", "JJ"), ("several", "JJ"),
];

/// Common open-class words whose suffix would mislead the guesser.
const OPEN_CLASS: &[(&str, &str)] = &[
    // nouns
    ("love", "NN"), ("hope", "NN"), ("time", "NN"), ("money", "NN"), ("life", "NN"),
    ("death", "NN"), ("heart", "NN"), ("soul", "NN"), ("world", "NN"), ("stage", "NN"),
    ("rose", "NN"), ("worm", "NN"), ("storm", "NN"), ("night", "NN"), ("day", "NN"),
    ("bed", "NN"), ("joy", "NN"), ("secret", "NN"), ("sun", "NN"), ("moon", "NN"),
    ("star", "NN"), ("sky", "NN"), ("sea", "NN"), ("cloud", "NN"), ("wind", "NN"),
    ("rain", "NN"), ("fire", "NN"), ("light", "NN"), ("dream", "NN"), ("mind", "NN"),
    ("eye", "NN"), ("hand", "NN"), ("face", "NN"), ("voice", "NN"), ("song", "NN"),
    ("angel", "NN"), ("tree", "NN"), ("wood", "NN"), ("road", "NN"), ("way", "NN"),
    ("host", "NN"), ("crowd", "NN"), ("claim", "NN"), ("wear", "NN"), ("traveler", "NN"),
    ("undergrowth", "NN"), ("cat", "NN"), ("mat", "NN"), ("rat", "NN"), ("peck", "NN"),
    ("man", "NN"), ("woman", "NN"), ("person", "NN"), ("thing", "NN"), ("animal", "NN"),
    ("human", "NN"), ("boy", "NN"), ("girl", "NN"), ("child", "NN"), ("king", "NN"),
    ("queen", "NN"), ("god", "NN"), ("war", "NN"), ("peace", "NN"), ("truth", "NN"),
    ("beauty", "NN"), ("grief", "NN"), ("pain", "NN"), ("sorrow", "NN"), ("fear", "NN"),
    ("earth", "NN"), ("heaven", "NN"), ("water", "NN"), ("river", "NN"), ("snow", "NN"),
    ("flower", "NN"), ("garden", "NN"), ("bird", "NN"), ("morning", "NN"),
    ("evening", "NN"), ("spring", "NN"), ("summer", "NN"), ("winter", "NN"),
    ("autumn", "NN"), ("silence", "NN"), ("shadow", "NN"), ("memory", "NN"),
    ("people", "NNS"), ("men", "NNS"), ("women", "NNS"), ("children", "NNS"),
    ("eyes", "NNS"), ("hills", "NNS"), ("vales", "NNS"), ("roads", "NNS"),
    ("daffodils", "NNS"), ("peppers", "NNS"), ("stars", "NNS"),
    // verbs
    ("sings", "VBZ"), ("flies", "VBZ"), ("floats", "VBZ"), ("goes", "VBZ"),
    ("sat", "VBD"), ("found", "VBD"), ("saw", "VBD"), ("stood", "VBD"), ("took", "VBD"),
    ("bent", "VBD"), ("came", "VBD"), ("went", "VBD"), ("made", "VBD"), ("knew", "VBD"),
    ("felt", "VBD"), ("left", "VBD"), ("wept", "VBD"), ("fell", "VBD"), ("grew", "VBD"),
    ("worn", "VBN"), ("gone", "VBN"), ("seen", "VBN"), ("known", "VBN"),
    ("destroy", "VB"), ("travel", "VB"), ("sing", "VBP"), ("go", "VBP"), ("see", "VBP"),
    ("know", "VBP"), ("come", "VBP"), ("die", "VBP"), ("fly", "VBP"), ("walk", "VBP"),
    ("weep", "VBP"), ("make", "VBP"), ("take", "VBP"), ("give", "VBP"), ("say", "VBP"),
    ("said", "VBD"),
    // adjectives
    ("sick", "JJ"), ("invisible", "JJ"), ("dark", "JJ"), ("crimson", "JJ"), ("red", "JJ"),
    ("blue", "JJ"), ("sweet", "JJ"), ("tall", "JJ"), ("golden", "JJ"), ("yellow", "JJ"),
    ("lonely", "JJ"), ("high", "JJ"), ("fair", "JJ"), ("grassy", "JJ"), ("sorry", "JJ"),
    ("good", "JJ"), ("bad", "JJ"), ("happy", "JJ"), ("sad", "JJ"), ("old", "JJ"),
    ("young", "JJ"), ("new", "JJ"), ("great", "JJ"), ("little", "JJ"), ("small", "JJ"),
    ("big", "JJ"), ("deep", "JJ"), ("cold", "JJ"), ("warm", "JJ"), ("bright", "JJ"),
    ("wild", "JJ"), ("green", "JJ"), ("white", "JJ"), ("black", "JJ"), ("silent", "JJ"),
    ("gentle", "JJ"), ("quiet", "JJ"), ("free", "JJ"), ("true", "JJ"), ("lovely", "JJ"),
    ("holy", "JJ"), ("early", "JJ"), ("only", "JJ"),
    ("really", "RB"),
];

static LEXICON: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    // Closed-class entries win over open-class ones.
    OPEN_CLASS
        .iter()
        .chain(CLOSED_CLASS.iter())
        .copied()
        .collect()
});

/// Suffix rules tried in order on unknown lowercase words:
/// (suffix, minimum word length in chars, tag).
const SUFFIX_RULES: &[(&str, usize, &str)] = &[
    ("ing", 5, "VBG"),
    ("ed", 4, "VBD"),
    ("ly", 4, "RB"),
    ("ness", 5, "NN"),
    ("ment", 5, "NN"),
    ("tion", 5, "NN"),
    ("sion", 5, "NN"),
    ("ity", 4, "NN"),
    ("ship", 5, "NN"),
    ("hood", 5, "NN"),
    ("ism", 4, "NN"),
    ("ous", 4, "JJ"),
    ("ful", 4, "JJ"),
    ("ive", 4, "JJ"),
    ("able", 5, "JJ"),
    ("ible", 5, "JJ"),
    ("less", 5, "JJ"),
    ("ish", 4, "JJ"),
    ("al", 4, "JJ"),
    ("ic", 4, "JJ"),
    ("est", 5, "JJS"),
];

const AUXILIARIES: &[&str] = &[
    "have", "has", "had", "having", "hath", "is", "are", "am", "was", "were", "be", "been",
    "being",
];

/// A deterministic tagger backed by built-in word lists and suffix rules.
#[derive(Clone, Debug, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a new lexicon tagger.
    pub fn new() -> Self {
        LexiconTagger
    }

    fn punctuation_tag(token: &str) -> &'static str {
        match token {
            "." | "!" | "?" => ".",
            "," => ",",
            ":" | ";" | "-" | "--" | "..." | "\u{2014}" | "\u{2013}" | "\u{2026}" => ":",
            "(" | "[" | "{" => "(",
            ")" | "]" | "}" => ")",
            "\"" | "\u{201C}" | "`" | "``" => "``",
            "'" | "\u{201D}" | "\u{2019}" | "''" => "''",
            "$" => "$",
            "#" => "#",
            _ => "SYM",
        }
    }

    fn is_number(token: &str) -> bool {
        token.chars().any(|c| c.is_ascii_digit())
            && token
                .chars()
                .all(|c| c.is_ascii_digit() || c == ',' || c == '.' || c == '/' || c == '-')
    }

    fn clitic_tag(lower: &str, previous_tag: Option<&str>) -> Option<&'static str> {
        let normalized = lower.replace('\u{2019}', "'");
        let tag = match normalized.as_str() {
            "n't" => "RB",
            "'s" => match previous_tag {
                Some("PRP") | Some("EX") | Some("WP") => "VBZ",
                _ => "POS",
            },
            "'re" | "'ve" | "'m" => "VBP",
            "'ll" | "'d" => "MD",
            _ => return None,
        };
        Some(tag)
    }

    fn guess_by_suffix(lower: &str) -> &'static str {
        let len = lower.chars().count();
        for (suffix, min_len, tag) in SUFFIX_RULES {
            if len >= *min_len && lower.ends_with(suffix) {
                return tag;
            }
        }
        if len > 3
            && lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
        {
            return "NNS";
        }
        "NN"
    }

    fn starts_sentence(previous: Option<&str>) -> bool {
        match previous {
            None => true,
            Some(p) => matches!(p, "." | "!" | "?" | "\"" | "\u{201C}" | "``"),
        }
    }

    fn lexical_tag(token: &str, previous: Option<&str>, previous_tag: Option<&str>) -> String {
        if !token.chars().any(char::is_alphanumeric) {
            return Self::punctuation_tag(token).to_string();
        }
        if Self::is_number(token) {
            return "CD".to_string();
        }

        let lower = token.to_lowercase();
        if let Some(tag) = Self::clitic_tag(&lower, previous_tag) {
            return tag.to_string();
        }
        if let Some(tag) = LEXICON.get(lower.as_str()) {
            return (*tag).to_string();
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !Self::starts_sentence(previous) {
            return if lower.ends_with('s') && lower.chars().count() > 3 {
                "NNPS".to_string()
            } else {
                "NNP".to_string()
            };
        }

        Self::guess_by_suffix(&lower).to_string()
    }

    fn repair(tokens: &[&str], tags: &mut [String]) {
        for i in 1..tags.len() {
            let previous_word = tokens[i - 1].to_lowercase();
            let previous_tag = tags[i - 1].clone();
            let current = tags[i].as_str();

            let repaired = match (previous_tag.as_str(), current) {
                ("TO", "NN" | "VBP") | ("MD", "NN" | "VBP") => Some("VB"),
                ("DT" | "PRP$", "VB" | "VBP") => Some("NN"),
                (_, "VBD") if AUXILIARIES.contains(&previous_word.as_str()) => Some("VBN"),
                _ => None,
            };

            if let Some(tag) = repaired {
                tags[i] = tag.to_string();
            }
        }
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[&str]) -> Result<Vec<TaggedToken>> {
        let mut tags: Vec<String> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let previous = if i > 0 { Some(tokens[i - 1]) } else { None };
            let previous_tag = tags.last().map(String::as_str);
            let tag = Self::lexical_tag(token, previous, previous_tag);
            tags.push(tag);
        }

        Self::repair(tokens, &mut tags);

        Ok(tokens
            .iter()
            .zip(tags)
            .map(|(word, tag)| TaggedToken::new(*word, tag))
            .collect())
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tokens: &[&str]) -> Vec<String> {
        LexiconTagger::new()
            .tag(tokens)
            .unwrap()
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn test_closed_class_and_punctuation() {
        assert_eq!(
            tags(&["the", "cat", "sat", "on", "the", "mat", "."]),
            vec!["DT", "NN", "VBD", "IN", "DT", "NN", "."]
        );
    }

    #[test]
    fn test_suffix_guessing() {
        assert_eq!(
            tags(&["howling", "diverged", "softly", "kindness", "pickled"]),
            vec!["VBG", "VBD", "RB", "NN", "VBD"]
        );
        assert_eq!(tags(&["lanterns"]), vec!["NNS"]);
        assert_eq!(tags(&["glass"]), vec!["NN"]);
    }

    #[test]
    fn test_proper_nouns_inside_sentence() {
        assert_eq!(
            tags(&["Peter", "Piper", "picked"]),
            vec!["NN", "NNP", "VBD"]
        );
    }

    #[test]
    fn test_contextual_repairs() {
        assert_eq!(tags(&["to", "dream"]), vec!["TO", "VB"]);
        assert_eq!(tags(&["could", "walk"]), vec!["MD", "VB"]);
        assert_eq!(tags(&["a", "walk"]), vec!["DT", "NN"]);
        assert_eq!(tags(&["had", "picked"]), vec!["VBD", "VBN"]);
    }

    #[test]
    fn test_clitics_and_numbers() {
        assert_eq!(tags(&["do", "n't"]), vec!["VBP", "RB"]);
        assert_eq!(tags(&["it", "'s"]), vec!["PRP", "VBZ"]);
        assert_eq!(tags(&["cat", "'s"]), vec!["NN", "POS"]);
        assert_eq!(tags(&["1,000"]), vec!["CD"]);
    }

    #[test]
    fn test_noun_is_noun() {
        assert_eq!(tags(&["time", "is", "money"]), vec!["NN", "VBZ", "NN"]);
        assert_eq!(tags(&["love", "is", "man"]), vec!["NN", "VBZ", "NN"]);
    }

    #[test]
    fn test_one_tag_per_token() {
        let input = ["Hello", ",", "world", "!", "'"];
        assert_eq!(tags(&input).len(), input.len());
        assert!(tags(&[]).is_empty());
    }
}
