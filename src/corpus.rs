//! Collection of documents sharing one exclusion filter
//!
//! Aggregate queries run the per-document functions over the concatenation
//! of every document, so words shared between documents are only counted
//! once by unique-word queries.

use crate::io::configuration::TOP_NGRAMS_REPORTED;
use crate::io::error::{Result, TextCloudError, invalid_argument};
use crate::layout::placement::{LayoutEngine, LayoutOutcome};
use crate::statistics::frequency::{self, WeightedWord};
use crate::statistics::ngram::{self, NGram, WindowRange};
use crate::text::document::Document;
use crate::text::filter::ExclusionFilter;
use crate::text::tokenizer::CaseMode;
use rand::Rng;
use tracing::{info, warn};

/// Per-document value keyed by document identifier
pub type PerDocument<T> = Vec<(String, T)>;

/// A document that could not be loaded
#[derive(Debug)]
pub struct SkippedDocument {
    /// Identifier of the rejected source
    pub identifier: String,
    /// Why it was rejected
    pub error: TextCloudError,
}

/// Documents plus the filter applied by every query
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    filter: ExclusionFilter,
    case: CaseMode,
}

impl Corpus {
    /// Create an empty corpus tokenizing with the given case policy
    pub fn new(case: CaseMode, filter: ExclusionFilter) -> Self {
        Self {
            documents: Vec::new(),
            filter,
            case,
        }
    }

    /// Decode and tokenize every source, skipping ones that fail to decode
    ///
    /// Failures are logged and returned alongside the corpus; they never
    /// abort loading of the remaining sources.
    pub fn load<I, S, B>(
        sources: I,
        case: CaseMode,
        filter: ExclusionFilter,
    ) -> (Self, Vec<SkippedDocument>)
    where
        I: IntoIterator<Item = (S, B)>,
        S: Into<String>,
        B: AsRef<[u8]>,
    {
        let mut corpus = Self::new(case, filter);
        let mut skipped = Vec::new();

        for (identifier, bytes) in sources {
            let identifier = identifier.into();
            if let Err(error) = corpus.add_bytes(identifier.clone(), bytes.as_ref()) {
                warn!(document = %identifier, error = %error, "document_skipped");
                skipped.push(SkippedDocument { identifier, error });
            }
        }

        info!(
            documents = corpus.documents.len(),
            skipped = skipped.len(),
            "corpus_loaded"
        );

        (corpus, skipped)
    }

    /// Decode, tokenize and append one source
    ///
    /// # Errors
    ///
    /// Returns [`TextCloudError::DecodeFailure`] if the bytes are not UTF-8,
    /// or [`TextCloudError::InvalidArgument`] if the identifier is already used
    pub fn add_bytes(&mut self, identifier: impl Into<String>, bytes: &[u8]) -> Result<()> {
        let document = Document::from_bytes(identifier, bytes, self.case)?;
        self.push(document)
    }

    /// Tokenize and append decoded text
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is already used
    pub fn add_text(&mut self, identifier: impl Into<String>, text: &str) -> Result<()> {
        self.push(Document::from_text(identifier, text, self.case))
    }

    /// Append an already tokenized document
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is already used
    pub fn push(&mut self, document: Document) -> Result<()> {
        if self.document(document.identifier()).is_some() {
            return Err(invalid_argument(
                "identifier",
                &document.identifier(),
                &"document identifiers must be unique within a corpus",
            ));
        }
        self.documents.push(document);
        Ok(())
    }

    /// Replace the exclusion filter used by all later queries
    pub fn set_filter(&mut self, filter: ExclusionFilter) {
        self.filter = filter;
    }

    /// Filter applied by every query
    pub const fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }

    /// Case policy applied when tokenizing new documents
    pub const fn case(&self) -> CaseMode {
        self.case
    }

    /// Documents in load order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Document with the given identifier
    pub fn document(&self, identifier: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|document| document.identifier() == identifier)
    }

    /// Whether no document was loaded
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Every token of every document, in load order
    pub fn tokens(&self) -> impl Iterator<Item = &String> {
        self.documents.iter().flat_map(|document| document.tokens())
    }

    /// Admitted words across all documents
    pub fn word_count(&self) -> usize {
        frequency::word_count(self.tokens(), &self.filter)
    }

    /// Distinct admitted words across all documents
    pub fn unique_word_count(&self) -> usize {
        frequency::unique_word_count(self.tokens(), &self.filter)
    }

    /// Admitted words of each document
    pub fn word_count_per_document(&self) -> PerDocument<usize> {
        self.per_document(|document| frequency::word_count(document.tokens(), &self.filter))
    }

    /// Distinct admitted words of each document
    pub fn unique_word_count_per_document(&self) -> PerDocument<usize> {
        self.per_document(|document| {
            frequency::unique_word_count(document.tokens(), &self.filter)
        })
    }

    /// Most frequent n-grams across all documents
    ///
    /// Returns at most [`TOP_NGRAMS_REPORTED`] entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn top_ngrams(&self, size: usize, window: WindowRange) -> Result<Vec<NGram>> {
        let table = ngram::extract_aggregate(&self.documents, size, window)?;
        Ok(table.top(TOP_NGRAMS_REPORTED))
    }

    /// Most frequent n-grams of each document
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero
    pub fn top_ngrams_per_document(
        &self,
        size: usize,
        window: WindowRange,
    ) -> Result<PerDocument<Vec<NGram>>> {
        self.documents
            .iter()
            .map(|document| {
                let table = ngram::extract(document.tokens(), size, window)?;
                Ok((
                    document.identifier().to_owned(),
                    table.top(TOP_NGRAMS_REPORTED),
                ))
            })
            .collect()
    }

    /// Admitted words across all documents, heaviest first
    pub fn weighted_words(&self) -> Vec<WeightedWord> {
        frequency::weighted_words(self.tokens(), &self.filter)
    }

    /// Lay out the aggregate word cloud
    ///
    /// # Errors
    ///
    /// Returns an error if no admitted word exists
    pub fn word_cloud<R: Rng>(&self, engine: &LayoutEngine, rng: &mut R) -> Result<LayoutOutcome> {
        engine.layout(&self.weighted_words(), rng)
    }

    /// Lay out one word cloud per document
    ///
    /// A document without admitted words yields an error for that document
    /// only.
    pub fn word_cloud_per_document<R: Rng>(
        &self,
        engine: &LayoutEngine,
        rng: &mut R,
    ) -> PerDocument<Result<LayoutOutcome>> {
        self.per_document(|document| {
            let words = frequency::weighted_words(document.tokens(), &self.filter);
            engine.layout(&words, rng)
        })
    }

    fn per_document<T>(&self, mut query: impl FnMut(&Document) -> T) -> PerDocument<T> {
        self.documents
            .iter()
            .map(|document| (document.identifier().to_owned(), query(document)))
            .collect()
    }
}
