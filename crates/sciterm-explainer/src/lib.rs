//! Sciterm Explainer
//!
//! Explains a scientific term at a chosen level and language, and suggests
//! exactly three related terms.
//!
//! # Architecture
//!
//! ```text
//! ExplainRequest → prompt → LLM → explanation ─────────────────┐
//!                → related-terms prompt → LLM → Extractor ─────┴→ ExplainResponse
//! ```
//!
//! The explanation call may fail and its error is returned. The related-terms
//! call may not: any failure there is replaced by empty text, and the
//! extractor pads the result from the lookup term.
//!
//! # Example Usage
//!
//! ```
//! use sciterm_explainer::{Explainer, ExplainerConfig, ExplainRequest};
//! use sciterm_llm::MockProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new("Chlorophyll, Stomata, Calvin cycle");
//! let explainer = Explainer::new(llm, ExplainerConfig::default());
//!
//! let response = explainer
//!     .explain(ExplainRequest::new("Photosynthesis", "student"))
//!     .await?;
//!
//! assert_eq!(response.relative_terms, ["Chlorophyll", "Stomata", "Calvin cycle"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod explainer;
pub mod prompt;
mod types;


pub use config::{ConfigError, ExplainerConfig};
pub use error::ExplainerError;
pub use explainer::Explainer;
pub use types::{ExplainRequest, ExplainResponse, RelatedTermsResponse};
