//! Text ingestion
//!
//! This module contains everything between raw bytes and stored words:
//! - Tokenization under a case policy
//! - Exclusion filters and their parsers
//! - Per-file documents

/// Documents holding one source's tokens
pub mod document;
/// Immutable exclusion sets shared across queries
pub mod filter;
/// Delimiter-based word splitting
pub mod tokenizer;

pub use document::Document;
pub use filter::ExclusionFilter;
pub use tokenizer::{CaseMode, tokenize};
