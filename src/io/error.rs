//! Error types for corpus loading, statistics and layout operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all text analysis operations
#[derive(Debug)]
pub enum TextCloudError {
    /// Source path is neither a readable file nor an enumerable directory
    InvalidPath {
        /// Path supplied by the caller
        path: PathBuf,
        /// Description of why the path was rejected
        reason: String,
    },

    /// Document bytes are not valid UTF-8
    ///
    /// Recoverable: the corpus skips the document and keeps loading the rest.
    DecodeFailure {
        /// Identifier of the document that failed to decode
        identifier: String,
        /// Underlying decoding error
        source: std::str::Utf8Error,
    },

    /// Operation argument validation failed
    InvalidArgument {
        /// Name of the invalid argument
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Some labels could not be placed inside the canvas without overlap
    LayoutExhausted {
        /// Words that ran out of retries or never fit the canvas
        words: Vec<String>,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TextCloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path, reason } => {
                write!(f, "Invalid source path '{}': {reason}", path.display())
            }
            Self::DecodeFailure { identifier, source } => {
                write!(f, "Failed to decode '{identifier}' as UTF-8: {source}")
            }
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::LayoutExhausted { words } => {
                write!(
                    f,
                    "Could not place {} label(s): {}",
                    words.len(),
                    words.join(", ")
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TextCloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DecodeFailure { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for text analysis results
pub type Result<T> = std::result::Result<T, TextCloudError>;

impl TextCloudError {
    /// Whether the failure only affects a single document
    ///
    /// Callers aggregating over a corpus skip such documents instead of aborting.
    pub const fn is_per_document(&self) -> bool {
        matches!(self, Self::DecodeFailure { .. })
    }
}

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextCloudError {
    TextCloudError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path and operation
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> TextCloudError {
    TextCloudError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
