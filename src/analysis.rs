//! Language collaborators used by the poem analyzers.
//!
//! Tokenization, part-of-speech tagging and sentiment scoring sit behind the
//! [`Tokenizer`](tokenizer::Tokenizer), [`Tagger`](tagger::Tagger) and
//! [`SentimentScorer`](sentiment::SentimentScorer) traits. Each has a
//! built-in implementation that needs no external models.

pub mod sentiment;
pub mod tagger;
pub mod token;
pub mod tokenizer;
