//! Part-of-speech tagging.
//!
//! Tags follow the Penn Treebank tag set (`NN`, `VBZ`, `JJ`, ...), which is
//! what [`PosGrouper`](crate::poetry::pos::PosGrouper) and the metaphor
//! heuristic expect.

use crate::analysis::token::TaggedToken;
use crate::error::Result;

/// Trait for part-of-speech taggers.
pub trait Tagger: Send + Sync {
    /// Tag a sequence of surface tokens. The output has one entry per input
    /// token, in the same order.
    fn tag(&self, tokens: &[&str]) -> Result<Vec<TaggedToken>>;

    /// Get the name of this tagger (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lexicon;

pub use lexicon::LexiconTagger;
