//! Configuration for the Explainer

use crate::error::ExplainerError;
use sciterm_llm::groq::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
use sciterm_llm::GroqProvider;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the API key unless configured otherwise
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// API key environment variable is not set
    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),
}

/// Configuration for the Explainer and its LLM provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainerConfig {
    /// OpenAI-compatible API endpoint
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Environment variable the API key is read from
    pub api_key_env: String,

    /// Timeout for a single HTTP request (seconds)
    pub request_timeout_secs: u64,

    /// Timeout for one generation including retries (seconds)
    pub generation_timeout_secs: u64,

    /// Attempts per prompt
    pub max_retries: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion budget in tokens
    pub max_tokens: u32,
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            generation_timeout_secs: 120,
            max_retries: DEFAULT_MAX_RETRIES,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ExplainerConfig {
    /// Get the generation timeout as a Duration
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if self.endpoint.trim().is_empty() {
            return invalid("endpoint must not be empty");
        }
        if self.model.trim().is_empty() {
            return invalid("model must not be empty");
        }
        if self.api_key_env.trim().is_empty() {
            return invalid("api_key_env must not be empty");
        }
        if self.request_timeout_secs == 0 {
            return invalid("request_timeout_secs must be greater than 0");
        }
        if self.generation_timeout_secs == 0 {
            return invalid("generation_timeout_secs must be greater than 0");
        }
        if self.max_retries == 0 {
            return invalid("max_retries must be greater than 0");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return invalid("temperature must be between 0.0 and 2.0");
        }
        if self.max_tokens == 0 {
            return invalid("max_tokens must be greater than 0");
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(self.api_key_env.clone()))
    }

    /// Build a Groq provider from this configuration
    pub fn groq_provider(
        &self,
        api_key: impl Into<String>,
    ) -> Result<GroqProvider, ExplainerError> {
        let provider = GroqProvider::new(api_key, self.model.clone())
            .map_err(|e| ExplainerError::Llm(e.to_string()))?
            .with_endpoint(self.endpoint.clone())
            .with_timeout(self.request_timeout())
            .with_max_retries(self.max_retries)
            .with_sampling(self.temperature, self.max_tokens);
        Ok(provider)
    }
}
