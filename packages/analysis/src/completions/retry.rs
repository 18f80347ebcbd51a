//! Retry decorator for completion services.
//!
//! Wraps any [`CompletionService`] and retries rate-limited calls with
//! linear backoff. Every other failure propagates immediately: an
//! unconfigured backend cannot be fixed by retrying, and non-transient API
//! errors should surface as-is.

use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

use crate::error::{CompletionError, CompletionResult};
use crate::traits::CompletionService;

/// Default attempt ceiling.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Seconds multiplied by the attempt number for linear backoff (2s, 4s, 6s).
const BACKOFF_STEP_SECS: u64 = 2;

/// Completion service decorator adding rate-limit retries.
pub struct RetryingCompletion<C> {
    inner: C,
    max_retries: u32,
}

impl<C> RetryingCompletion<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the attempt ceiling.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }
}

#[async_trait]
impl<C: CompletionService> CompletionService for RetryingCompletion<C> {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        for attempt in 0..self.max_retries {
            match self.inner.complete(prompt).await {
                Ok(text) => return Ok(text),
                Err(CompletionError::RateLimited) if attempt + 1 < self.max_retries => {
                    let wait = Duration::from_secs((attempt as u64 + 1) * BACKOFF_STEP_SECS);
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        wait_secs = wait.as_secs(),
                        "Rate limited, backing off before retry"
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => return Err(e),
            }
        }

        // Loop only exits via return; max_retries >= 1 guarantees at least
        // one iteration.
        unreachable!("retry loop always returns")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completions::MockCompletion;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_retried_with_linear_backoff() {
        let mock = MockCompletion::new()
            .then_rate_limited()
            .then_rate_limited()
            .then_text("third time lucky");
        let retrying = RetryingCompletion::new(mock.clone());

        let start = Instant::now();
        let text = retrying.complete("prompt").await.unwrap();

        assert_eq!(text, "third time lucky");
        assert_eq!(mock.call_count(), 3);
        // 2s before the second attempt, 4s before the third
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_exhaustion_propagates() {
        let mock = MockCompletion::new()
            .then_rate_limited()
            .then_rate_limited()
            .then_rate_limited();
        let retrying = RetryingCompletion::new(mock.clone());

        let err = retrying.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionError::RateLimited));
        assert_eq!(mock.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_api_error_not_retried() {
        let mock = MockCompletion::new().then_api_error(500, "boom");
        let retrying = RetryingCompletion::new(mock.clone());

        let start = Instant::now();
        let err = retrying.complete("prompt").await.unwrap_err();

        assert!(matches!(err, CompletionError::Api { status: 500, .. }));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unconfigured_not_retried() {
        let mock = MockCompletion::new().then_unconfigured();
        let retrying = RetryingCompletion::new(mock.clone());

        let err = retrying.complete("prompt").await.unwrap_err();
        assert!(matches!(err, CompletionError::Unconfigured));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_retry_ceiling() {
        let mock = MockCompletion::new().then_rate_limited().then_text("ok");
        let retrying = RetryingCompletion::new(mock.clone()).with_max_retries(2);

        let text = retrying.complete("prompt").await.unwrap();
        assert_eq!(text, "ok");
        assert_eq!(mock.call_count(), 2);
    }
}
