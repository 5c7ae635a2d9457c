//! Input/output surfaces around the analysis core
//!
//! This module contains:
//! - Error types and configuration constants
//! - Source enumeration and the command-line front end
//! - Report and SVG serialization
//! - Progress display

/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress bars for long stages
pub mod progress;
/// Plain-text statistics reports
pub mod report;
/// File and directory enumeration
pub mod source;
/// Word cloud SVG rendering
pub mod svg;
