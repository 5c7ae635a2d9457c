//! Plain-text statistics reports, aggregate or per document

use crate::corpus::{Corpus, PerDocument};
use crate::io::configuration::TOP_NGRAMS_REPORTED;
use crate::io::error::Result;
use crate::statistics::ngram::{NGram, WindowRange};
use std::io::Write;

/// Which sections a report contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Include word counts
    pub words: bool,
    /// Include unique word counts
    pub unique: bool,
    /// Report each document separately instead of the whole corpus
    pub per_document: bool,
    /// N-gram size; `None` leaves n-grams out
    pub ngram_size: Option<usize>,
    /// Window convention for n-gram counting
    pub window: WindowRange,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            words: true,
            unique: true,
            per_document: false,
            ngram_size: None,
            window: WindowRange::default(),
        }
    }
}

/// Statistics for the corpus as a whole
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateReport {
    /// Admitted words
    pub word_count: Option<usize>,
    /// Distinct admitted words
    pub unique_word_count: Option<usize>,
    /// N-gram size and its most frequent n-grams
    pub ngrams: Option<(usize, Vec<NGram>)>,
}

/// Statistics for each document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PerDocumentReport {
    /// Admitted words per document
    pub word_counts: Option<PerDocument<usize>>,
    /// Distinct admitted words per document
    pub unique_word_counts: Option<PerDocument<usize>>,
    /// N-gram size and the most frequent n-grams per document
    pub ngrams: Option<(usize, PerDocument<Vec<NGram>>)>,
}

/// Report ready for serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Whole-corpus statistics
    Aggregate(AggregateReport),
    /// Per-document statistics
    PerDocument(PerDocumentReport),
}

impl Report {
    /// Compute the requested statistics
    ///
    /// # Errors
    ///
    /// Returns an error if the n-gram size is zero
    pub fn build(corpus: &Corpus, options: &ReportOptions) -> Result<Self> {
        if options.per_document {
            let ngrams = options
                .ngram_size
                .map(|size| {
                    corpus
                        .top_ngrams_per_document(size, options.window)
                        .map(|grams| (size, grams))
                })
                .transpose()?;

            return Ok(Self::PerDocument(PerDocumentReport {
                word_counts: options.words.then(|| corpus.word_count_per_document()),
                unique_word_counts: options
                    .unique
                    .then(|| corpus.unique_word_count_per_document()),
                ngrams,
            }));
        }

        let ngrams = options
            .ngram_size
            .map(|size| {
                corpus
                    .top_ngrams(size, options.window)
                    .map(|grams| (size, grams))
            })
            .transpose()?;

        Ok(Self::Aggregate(AggregateReport {
            word_count: options.words.then(|| corpus.word_count()),
            unique_word_count: options.unique.then(|| corpus.unique_word_count()),
            ngrams,
        }))
    }

    /// Render the report as text lines
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        match self {
            Self::Aggregate(report) => {
                if let Some(count) = report.word_count {
                    lines.push(format!("Number of words:\t\t{count}"));
                }
                if let Some(count) = report.unique_word_count {
                    lines.push(format!("Number of unique words:\t\t{count}"));
                }
                if let Some((size, grams)) = &report.ngrams {
                    lines.push(format!(
                        "{TOP_NGRAMS_REPORTED} most frequent {size}-grams are:\t{}",
                        format_ngrams(grams)
                    ));
                }
            }
            Self::PerDocument(report) => {
                if let Some(counts) = &report.word_counts {
                    lines.push("Number of words per file:".to_string());
                    lines.extend(counts.iter().map(|(id, count)| format!("\t{id}\t{count}")));
                }
                if let Some(counts) = &report.unique_word_counts {
                    lines.push("Number of unique words per file:".to_string());
                    lines.extend(counts.iter().map(|(id, count)| format!("\t{id}\t{count}")));
                }
                if let Some((size, per_document)) = &report.ngrams {
                    lines.push(format!(
                        "{TOP_NGRAMS_REPORTED} most frequent {size}-ngrams per file are:"
                    ));
                    lines.extend(
                        per_document
                            .iter()
                            .map(|(id, grams)| format!("\t{id}\t{}", format_ngrams(grams))),
                    );
                }
            }
        }

        lines
    }

    /// Write the report, one line per section entry
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

/// Format n-grams as `value(count)` joined by commas
pub fn format_ngrams(grams: &[NGram]) -> String {
    grams
        .iter()
        .map(|gram| format!("{}({})", gram.value, gram.count))
        .collect::<Vec<_>>()
        .join(", ")
}
