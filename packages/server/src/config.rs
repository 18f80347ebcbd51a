use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Missing key is not fatal: the service starts and reports 503 on
    /// analysis requests until one is provided.
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: Option<String>,
    pub min_content_chars: usize,
    pub max_content_chars: usize,
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            anthropic_api_key: env::var("ANTHROPIC_API_KEY").ok(),
            anthropic_model: env::var("ANTHROPIC_MODEL").ok(),
            min_content_chars: env::var("MIN_CONTENT_CHARS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .context("MIN_CONTENT_CHARS must be a valid number")?,
            max_content_chars: env::var("MAX_CONTENT_CHARS")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .context("MAX_CONTENT_CHARS must be a valid number")?,
            max_retries: env::var("MAX_RETRIES")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("MAX_RETRIES must be a valid number")?,
        })
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        port: 8000,
        anthropic_api_key: None,
        anthropic_model: None,
        min_content_chars: 100,
        max_content_chars: 10_000,
        max_retries: 3,
    }
}
