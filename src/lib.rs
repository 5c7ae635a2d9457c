//! Word statistics, n-gram rankings and word cloud layouts for text corpora
//!
//! Documents are tokenized once, counted under a shared exclusion filter,
//! and turned into plain-text reports or randomized, overlap-free word
//! cloud layouts that render to SVG.

#![forbid(unsafe_code)]

/// Documents sharing an exclusion filter, with aggregate and per-file queries
pub mod corpus;
/// Input/output operations and error handling
pub mod io;
/// Word cloud canvas, tiers and placement
pub mod layout;
/// Word frequency and n-gram counting
pub mod statistics;
/// Tokenization, exclusion filters and documents
pub mod text;

pub use corpus::Corpus;
pub use io::error::{Result, TextCloudError};
