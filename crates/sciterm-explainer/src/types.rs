//! Request and response types

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

/// Request to explain a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Scientific term to explain
    pub term: String,

    /// "student", "enthusiast", or "expert"
    pub level: String,

    /// "en", "hi", or "mr"; other codes are answered in English
    #[serde(default = "default_language")]
    pub language: String,
}

impl ExplainRequest {
    /// Request an English explanation
    pub fn new(term: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            level: level.into(),
            language: default_language(),
        }
    }

    /// Set the response language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Explanation plus exactly three related terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResponse {
    /// The term as looked up
    pub term: String,

    /// Level the explanation was written for
    pub level: String,

    /// Model-written explanation
    pub explanation: String,

    /// Three related terms, possibly including synthetic placeholders
    pub relative_terms: Vec<String>,
}

/// Related terms for a lookup, with extraction diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTermsResponse {
    /// The term as looked up
    pub term: String,

    /// Three related terms, possibly including synthetic placeholders
    pub relative_terms: Vec<String>,

    /// How many of the terms are synthetic
    pub padded: usize,

    /// Stage that completed the list
    pub resolved_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_language_defaults_to_english() {
        let request: ExplainRequest =
            serde_json::from_str(r#"{"term": "Osmosis", "level": "student"}"#).unwrap();
        assert_eq!(request.language, "en");
        assert_eq!(request, ExplainRequest::new("Osmosis", "student"));
    }

    #[test]
    fn test_response_uses_relative_terms_key() {
        let response = ExplainResponse {
            term: "Osmosis".to_string(),
            level: "student".to_string(),
            explanation: "Water moves.".to_string(),
            relative_terms: vec!["A".into(), "B".into(), "C".into()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["relative_terms"][2], "C");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
