//! Command implementations.

mod explain;
mod extract;
mod related;

pub use explain::execute_explain;
pub use extract::execute_extract;
pub use related::execute_related;

use crate::config::Config;
use crate::error::Result;
use sciterm_explainer::Explainer;
use sciterm_llm::GroqProvider;

/// Build an explainer backed by Groq from the loaded configuration.
fn groq_explainer(config: &Config) -> Result<Explainer<GroqProvider>> {
    let api_key = config.explainer.api_key()?;
    let provider = config.explainer.groq_provider(api_key)?;
    Ok(Explainer::new(provider, config.explainer.clone()))
}
