//! Core Explainer implementation

use crate::config::ExplainerConfig;
use crate::error::ExplainerError;
use crate::prompt::{explanation_prompt, related_terms_prompt};
use crate::types::{ExplainRequest, ExplainResponse, RelatedTermsResponse};
use sciterm_domain::traits::LlmProvider;
use sciterm_domain::{Language, Level, LookupTerm};
use sciterm_extractor::{extract_with_report, ExtractionReport};
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Explains scientific terms and suggests related ones
pub struct Explainer<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExplainerConfig,
}

impl<L> Explainer<L>
where
    L: LlmProvider,
{
    /// Create a new Explainer
    pub fn new(llm_provider: L, config: ExplainerConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Explain a term and attach three related terms
    ///
    /// # Errors
    ///
    /// Fails on an unknown level, an empty term, or when the explanation
    /// itself cannot be generated. Related-term failures never surface.
    pub async fn explain(
        &self,
        request: ExplainRequest,
    ) -> Result<ExplainResponse, ExplainerError> {
        let level = Level::parse(&request.level)
            .ok_or_else(|| ExplainerError::InvalidLevel(request.level.clone()))?;
        let term = LookupTerm::new(request.term);
        if term.is_empty() {
            return Err(ExplainerError::EmptyTerm);
        }
        let language = Language::from_code(&request.language);

        let start_time = Instant::now();
        info!(
            "Explaining '{}' for level '{}' in '{}'",
            term, level, language
        );

        let prompt = explanation_prompt(&term, level, language);
        let explanation = self.call_llm(&prompt).await?;
        debug!("Explanation length: {} chars", explanation.len());

        let report = self.related_terms(&term).await;

        info!(
            "Explained '{}' in {} ms ({} related terms resolved by {})",
            term,
            start_time.elapsed().as_millis(),
            report.extracted,
            report.resolved_by.as_str()
        );

        Ok(ExplainResponse {
            term: term.to_string(),
            level: level.to_string(),
            explanation,
            relative_terms: report.terms.into_vec(),
        })
    }

    /// Ask the model for related terms and distill exactly three
    ///
    /// Never fails: an LLM error or timeout is treated as an empty reply.
    pub async fn related_terms(&self, term: &LookupTerm) -> ExtractionReport {
        let prompt = related_terms_prompt(term);
        let raw_text = match self.call_llm(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Related-terms generation failed for '{}': {}", term, e);
                String::new()
            }
        };
        debug!("Related-terms response length: {} chars", raw_text.len());
        extract_with_report(term, &raw_text)
    }

    /// Related terms as a serializable response
    pub async fn related_terms_response(
        &self,
        term: impl Into<String>,
    ) -> Result<RelatedTermsResponse, ExplainerError> {
        let term = LookupTerm::new(term);
        if term.is_empty() {
            return Err(ExplainerError::EmptyTerm);
        }
        let report = self.related_terms(&term).await;
        Ok(RelatedTermsResponse {
            term: term.to_string(),
            padded: report.padded,
            resolved_by: report.resolved_by.as_str().to_string(),
            relative_terms: report.terms.into_vec(),
        })
    }

    /// Call the LLM provider under the generation timeout
    async fn call_llm(&self, prompt: &str) -> Result<String, ExplainerError> {
        debug!(
            "Prompt length: {} chars (model {})",
            prompt.len(),
            self.llm_provider.model_name()
        );
        timeout(
            self.config.generation_timeout(),
            self.llm_provider.generate(prompt),
        )
        .await
        .map_err(|_| ExplainerError::Timeout(self.config.generation_timeout_secs))?
        .map_err(|e| ExplainerError::Llm(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sciterm_llm::MockProvider;

    fn create_test_explainer(llm: MockProvider) -> Explainer<MockProvider> {
        Explainer::new(llm, ExplainerConfig::default())
    }

    #[tokio::test]
    async fn test_invalid_level_skips_llm() {
        let llm = MockProvider::new("unused");
        let explainer = create_test_explainer(llm.clone());

        let result = explainer.explain(ExplainRequest::new("Osmosis", "wizard")).await;
        assert!(matches!(result, Err(ExplainerError::InvalidLevel(level)) if level == "wizard"));
        assert_eq!(llm.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_term_rejected() {
        let explainer = create_test_explainer(MockProvider::default());
        let result = explainer.explain(ExplainRequest::new("   ", "student")).await;
        assert!(matches!(result, Err(ExplainerError::EmptyTerm)));
    }

    #[tokio::test]
    async fn test_two_llm_calls_per_explain() {
        let llm = MockProvider::new("Chlorophyll, Stomata, Calvin cycle");
        let explainer = create_test_explainer(llm.clone());

        explainer
            .explain(ExplainRequest::new("Photosynthesis", "expert"))
            .await
            .unwrap();
        assert_eq!(llm.call_count(), 2);
    }

    #[tokio::test]
    async fn test_related_terms_response() {
        let explainer = create_test_explainer(MockProvider::new("1. Mitosis 2. Meiosis"));
        let response = explainer.related_terms_response("Cell Division").await.unwrap();
        assert_eq!(
            response.relative_terms,
            ["Mitosis", "Meiosis", "Cell Division mechanism"]
        );
        assert_eq!(response.padded, 1);
        assert_eq!(response.resolved_by, "padding");
    }
}
