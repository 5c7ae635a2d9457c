//! Per-file token storage

use crate::io::error::{Result, TextCloudError};
use crate::text::tokenizer::{CaseMode, tokenize};

/// One loaded source and its words
///
/// Tokens are produced once at construction and never change afterwards;
/// re-tokenizing means building a new document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    identifier: String,
    tokens: Vec<String>,
}

impl Document {
    /// Tokenize decoded text into a document
    pub fn from_text(identifier: impl Into<String>, text: &str, case: CaseMode) -> Self {
        Self {
            identifier: identifier.into(),
            tokens: tokenize(text, case).collect(),
        }
    }

    /// Decode raw bytes as UTF-8 and tokenize them
    ///
    /// # Errors
    ///
    /// Returns [`TextCloudError::DecodeFailure`] if the bytes are not valid UTF-8
    pub fn from_bytes(identifier: impl Into<String>, bytes: &[u8], case: CaseMode) -> Result<Self> {
        let identifier = identifier.into();
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Self::from_text(identifier, text, case)),
            Err(source) => Err(TextCloudError::DecodeFailure { identifier, source }),
        }
    }

    /// Build a document from tokens that are already normalized
    pub fn from_tokens<I, S>(identifier: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Path or name the document was loaded from
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Words in source order, including ones a filter would exclude
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of stored tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the document holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
