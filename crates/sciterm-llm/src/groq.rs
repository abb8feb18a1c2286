//! Groq Provider Implementation
//!
//! Talks to Groq's OpenAI-compatible chat-completions endpoint.
//!
//! # Features
//!
//! - Single-turn chat completion with bearer authentication
//! - Configurable endpoint, model, and sampling parameters
//! - Retry logic with exponential backoff
//! - Per-request timeout
//!
//! # Examples
//!
//! ```no_run
//! use sciterm_llm::GroqProvider;
//!
//! let provider = GroqProvider::new("gsk_...", "llama-3.3-70b-versatile")
//!     .unwrap()
//!     .with_max_retries(2);
//! ```

use crate::LlmError;
use async_trait::async_trait;
use reqwest::StatusCode;
use sciterm_domain::traits::LlmProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Groq API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com";

/// Default hosted model
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts per prompt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion budget in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 500;

const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

/// Groq API provider
pub struct GroqProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
    temperature: f32,
    max_tokens: u32,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new Groq provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Groq API key
    /// - `model`: Model to use (e.g., "llama-3.3-70b-versatile")
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Other` if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: Duration::from_secs(1),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Point the provider at another OpenAI-compatible endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the first backoff delay; later delays double
    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Set sampling temperature and completion budget
    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}{}", self.endpoint, COMPLETIONS_PATH)
    }

    /// Send one chat completion request, retrying transient failures
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The API key is rejected
    /// - The model is not available
    /// - The rate limit is exceeded
    /// - Network communication fails on every attempt
    /// - Response format is invalid
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let url = self.completions_url();
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .timeout(self.timeout)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response.json::<ChatCompletionResponse>().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return first_choice(body);
                    }
                    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                        return Err(LlmError::Authentication(format!("HTTP {}", status)));
                    }
                    if status == StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    }
                    if status == StatusCode::TOO_MANY_REQUESTS {
                        return Err(LlmError::RateLimitExceeded);
                    }
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    last_error = Some(LlmError::Communication(format!(
                        "HTTP {}: {}",
                        status, error_text
                    )));
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1x, 2x, 4x, ...
                let delay = self.retry_backoff * 2u32.pow(attempts - 1);
                warn!(
                    "Groq request failed (attempt {}/{}), retrying in {:?}",
                    attempts, self.max_retries, delay
                );
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

/// Trimmed content of the first choice
fn first_choice(body: ChatCompletionResponse) -> Result<String, LlmError> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default().trim().to_string())
        .ok_or_else(|| LlmError::InvalidResponse("Response has no choices".to_string()))
}

#[async_trait]
impl LlmProvider for GroqProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        debug!("Groq request: model {}, prompt length {}", self.model, prompt.len());
        let text = self.complete(prompt).await?;
        debug!("Groq response length: {} chars", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
