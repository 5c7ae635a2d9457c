//! Sliding-window n-gram counting, cross-document merging and ranking

use crate::io::configuration::NGRAM_DELIMITER;
use crate::io::error::{Result, invalid_argument};
use crate::text::document::Document;
use std::collections::HashMap;

/// Which window start positions are counted
///
/// `ExcludeLast` never counts the final window of a document, matching the
/// reports of earlier releases. `Inclusive` counts every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowRange {
    /// Windows start at `0..len - size`
    #[default]
    ExcludeLast,
    /// Windows start at `0..=len - size`
    Inclusive,
}

impl WindowRange {
    /// Number of windows of `size` tokens counted over `len` tokens
    pub const fn window_count(self, len: usize, size: usize) -> usize {
        if size == 0 || len < size {
            return 0;
        }
        match self {
            Self::ExcludeLast => len - size,
            Self::Inclusive => len - size + 1,
        }
    }
}

/// A joined run of tokens and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGram {
    /// Tokens joined by a single space
    pub value: String,
    /// Number of windows with this value
    pub count: usize,
}

/// Counts of every n-gram of one size, in first-seen order
#[derive(Debug, Clone)]
pub struct NGramTable {
    size: usize,
    positions: HashMap<String, usize>,
    entries: Vec<NGram>,
}

impl NGramTable {
    /// Create an empty table for n-grams of `size` tokens
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn new(size: usize) -> Result<Self> {
        validate_size(size)?;
        Ok(Self {
            size,
            positions: HashMap::new(),
            entries: Vec::new(),
        })
    }

    /// Number of tokens per n-gram
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct n-grams
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no n-gram was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Occurrences of a joined value, zero if never seen
    pub fn count(&self, value: &str) -> usize {
        self.positions
            .get(value)
            .and_then(|&position| self.entries.get(position))
            .map_or(0, |ngram| ngram.count)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|ngram| ngram.count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &NGram> {
        self.entries.iter()
    }

    /// Add `count` occurrences of a joined value
    pub fn record(&mut self, value: &str, count: usize) {
        if let Some(entry) = self
            .positions
            .get(value)
            .and_then(|&position| self.entries.get_mut(position))
        {
            entry.count += count;
            return;
        }

        self.positions.insert(value.to_owned(), self.entries.len());
        self.entries.push(NGram {
            value: value.to_owned(),
            count,
        });
    }

    /// Fold another table of the same size into this one, summing counts
    ///
    /// Identity is the joined value only, so merge order never changes counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables hold n-grams of different sizes
    pub fn merge(&mut self, other: &Self) -> Result<()> {
        if self.size != other.size {
            return Err(invalid_argument(
                "size",
                &other.size,
                &format!("cannot merge into a table of {}-grams", self.size),
            ));
        }

        for ngram in &other.entries {
            self.record(&ngram.value, ngram.count);
        }

        Ok(())
    }

    /// All n-grams by descending count
    ///
    /// The sort is stable: equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<NGram> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `n` most frequent n-grams, or all of them if fewer exist
    pub fn top(&self, n: usize) -> Vec<NGram> {
        let mut ranked = self.ranked();
        ranked.truncate(n.min(ranked.len()));
        ranked
    }
}

fn validate_size(size: usize) -> Result<()> {
    if size < 1 {
        return Err(invalid_argument(
            "size",
            &size,
            &"n-gram size must be >= 1",
        ));
    }
    Ok(())
}

/// Count every window of `size` consecutive tokens
///
/// # Errors
///
/// Returns an error if `size` is zero
pub fn extract<S>(tokens: &[S], size: usize, window: WindowRange) -> Result<NGramTable>
where
    S: AsRef<str>,
{
    let mut table = NGramTable::new(size)?;
    let counted = window.window_count(tokens.len(), size);

    for run in tokens.windows(size).take(counted) {
        let value = run
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(NGRAM_DELIMITER);
        table.record(&value, 1);
    }

    Ok(table)
}

/// Count n-grams per document and merge the tables by joined value
///
/// Windows never span two documents.
///
/// # Errors
///
/// Returns an error if `size` is zero
pub fn extract_aggregate<'a, I>(documents: I, size: usize, window: WindowRange) -> Result<NGramTable>
where
    I: IntoIterator<Item = &'a Document>,
{
    let mut aggregate = NGramTable::new(size)?;
    for document in documents {
        let table = extract(document.tokens(), size, window)?;
        aggregate.merge(&table)?;
    }
    Ok(aggregate)
}
