//! Word and unique-word counting under an exclusion filter
//!
//! Every function accepts any token sequence, so the same code answers both
//! per-document queries and aggregate queries over concatenated documents.

use crate::text::filter::ExclusionFilter;
use std::collections::{HashMap, HashSet};

/// Word paired with its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedWord {
    /// Normalized token
    pub word: String,
    /// Occurrences in the sequence the word was counted from
    pub weight: usize,
}

impl WeightedWord {
    /// Create a weighted word
    pub fn new(word: impl Into<String>, weight: usize) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

/// Count tokens that the filter admits
pub fn word_count<'a, I, S>(tokens: I, filter: &ExclusionFilter) -> usize
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    tokens
        .into_iter()
        .filter(|token| filter.admits(token.as_ref()))
        .count()
}

/// Count distinct tokens that the filter admits
///
/// Repeated tokens count once. For a corpus, pass the concatenation of all
/// documents: summing per-document results double-counts shared words.
pub fn unique_word_count<'a, I, S>(tokens: I, filter: &ExclusionFilter) -> usize
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    tokens
        .into_iter()
        .map(AsRef::as_ref)
        .filter(|token| filter.admits(token))
        .collect::<HashSet<&str>>()
        .len()
}

/// Occurrence counts of admitted tokens, heaviest first
///
/// Equal weights are ordered alphabetically so the list is deterministic.
pub fn weighted_words<'a, I, S>(tokens: I, filter: &ExclusionFilter) -> Vec<WeightedWord>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens.into_iter().map(AsRef::as_ref) {
        if filter.admits(token) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut weighted: Vec<WeightedWord> = counts
        .into_iter()
        .map(|(word, weight)| WeightedWord::new(word, weight))
        .collect();

    weighted.sort_by(|a, b| b.weight.cmp(&a.weight).then_with(|| a.word.cmp(&b.word)));

    weighted
}
