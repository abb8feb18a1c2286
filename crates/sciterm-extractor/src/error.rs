//! Error types for the extraction stages
//!
//! These never leave the crate's public API: the pipeline absorbs them and
//! falls back to padding.

use thiserror::Error;

/// Failures a stage can hit while producing candidates
#[derive(Error, Debug, Clone)]
pub(crate) enum ExtractionError {
    /// A built-in pattern failed to compile
    #[error("pattern '{name}' unavailable: {reason}")]
    Pattern {
        /// Strategy name
        name: &'static str,
        /// Compiler message
        reason: String,
    },
}
