//! Anthropic Messages API client.
//!
//! A minimal single-attempt client; retry policy lives in
//! [`RetryingCompletion`](crate::completions::RetryingCompletion). Failures
//! are classified structurally so callers never inspect message text to
//! decide whether to retry.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CompletionError, CompletionResult};
use crate::traits::CompletionService;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const API_VERSION: &str = "2023-06-01";

/// Default model for analysis stages.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Generous output ceiling; stage reports are long-form text.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Low temperature for near-deterministic analysis output.
pub const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Anthropic API client.
///
/// Constructed from an optional key so the service can start without one;
/// calls then fail with `CompletionError::Unconfigured`.
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl AnthropicClient {
    /// Create a new client. `api_key: None` yields an unconfigured client.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_key: api_key.map(SecretString::from),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Create from the `ANTHROPIC_API_KEY` environment variable, if set.
    pub fn from_env() -> Self {
        Self::new(std::env::var("ANTHROPIC_API_KEY").ok())
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the output-token ceiling.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Whether an API key is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Classify a non-success API response.
    ///
    /// HTTP 429 is a rate limit; so are `rate_limit_error` and
    /// `overloaded_error` body types. Everything else is a plain API error.
    fn classify_failure(status: u16, body: &str) -> CompletionError {
        if status == 429 {
            return CompletionError::RateLimited;
        }

        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
            if matches!(
                envelope.error.error_type.as_str(),
                "rate_limit_error" | "overloaded_error"
            ) {
                return CompletionError::RateLimited;
            }
            return CompletionError::Api {
                status,
                message: envelope.error.message,
            };
        }

        CompletionError::Api {
            status,
            message: body.to_string(),
        }
    }
}

#[async_trait]
impl CompletionService for AnthropicClient {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let api_key = self.api_key.as_ref().ok_or(CompletionError::Unconfigured)?;

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key.expose_secret())
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                CompletionError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %body, "Anthropic API error");
            return Err(Self::classify_failure(status.as_u16(), &body));
        }

        let message: MessagesResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Parse(e.to_string()))?;

        let text = message
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
            })
            .ok_or_else(|| CompletionError::Parse("no text content in response".into()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            "Anthropic completion"
        );

        Ok(text)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: String },
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    error_type: String,
    message: String,
}
