//! Counting over token sequences

/// Word, unique-word and weighted-word counts
pub mod frequency;
/// Sliding-window n-gram tables
pub mod ngram;

pub use frequency::{WeightedWord, unique_word_count, weighted_words, word_count};
pub use ngram::{NGram, NGramTable, WindowRange};
