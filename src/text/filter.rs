//! Shared set of words excluded from counting

use crate::io::error::{Result, file_system};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Immutable set of excluded tokens shared by every query over a corpus
///
/// Clones share the same backing set. Updating the exclusions means building
/// a new filter and replacing the old one; the set itself is never mutated.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    words: Arc<HashSet<String>>,
}

impl ExclusionFilter {
    /// Filter that excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a filter from already-normalized words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Whether the token is excluded
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Whether the token takes part in counting
    pub fn admits(&self, token: &str) -> bool {
        !self.contains(token)
    }

    /// Number of distinct excluded words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether nothing is excluded
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether both handles point at the same backing set
    pub fn shares_set_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.words, &other.words)
    }

    /// Copy of this filter with every word lowercased
    ///
    /// Matching is exact on both sides, so a case-insensitive corpus needs
    /// its filter folded the same way as its tokens.
    #[must_use]
    pub fn to_ascii_lowercase(&self) -> Self {
        Self::new(self.words.iter().map(|word| word.to_ascii_lowercase()))
    }
}

/// Parse filter words from a single argument
///
/// Words are separated by commas and/or whitespace. Duplicates collapse.
pub fn parse_word_list(words: &str) -> ExclusionFilter {
    ExclusionFilter::new(
        words
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|word| !word.is_empty()),
    )
}

/// Read filter words from a file holding one word per line
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text
pub fn parse_word_file(path: &Path) -> Result<ExclusionFilter> {
    let content =
        std::fs::read_to_string(path).map_err(|e| file_system(path, "read filter file", e))?;

    Ok(ExclusionFilter::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    ))
}
