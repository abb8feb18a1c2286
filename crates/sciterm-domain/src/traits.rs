//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use async_trait::async_trait;

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (sciterm-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for LLM operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Generate a text completion for a single-turn prompt
    async fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Model identifier, used for logging
    fn model_name(&self) -> &str;
}
