//! Error types for the Explainer

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur while explaining a term
#[derive(Error, Debug)]
pub enum ExplainerError {
    /// Level is not one of student, enthusiast, expert
    #[error("Invalid level: {0}")]
    InvalidLevel(String),

    /// Term is empty after trimming
    #[error("Term must not be empty")]
    EmptyTerm,

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// LLM call exceeded the configured timeout
    #[error("LLM request timed out after {0} seconds")]
    Timeout(u64),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}
