//! Mock completion service for testing.
//!
//! Scripted outcomes consumed in order, with every prompt recorded for
//! assertions on prompt construction.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::{CompletionError, CompletionResult};
use crate::traits::CompletionService;

/// One scripted outcome.
#[derive(Debug, Clone)]
enum Scripted {
    Text(String),
    RateLimited,
    Api { status: u16, message: String },
    Unconfigured,
}

/// Mock completion service for testing.
///
/// # Example
///
/// ```rust
/// use analysis::completions::MockCompletion;
///
/// let mock = MockCompletion::new()
///     .then_rate_limited()
///     .then_text("analysis output");
/// ```
#[derive(Default)]
pub struct MockCompletion {
    script: Arc<RwLock<VecDeque<Scripted>>>,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful completion.
    pub fn then_text(self, text: impl Into<String>) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(Scripted::Text(text.into()));
        self
    }

    /// Queue a rate-limit failure.
    pub fn then_rate_limited(self) -> Self {
        self.script.write().unwrap().push_back(Scripted::RateLimited);
        self
    }

    /// Queue a non-retryable API failure.
    pub fn then_api_error(self, status: u16, message: impl Into<String>) -> Self {
        self.script.write().unwrap().push_back(Scripted::Api {
            status,
            message: message.into(),
        });
        self
    }

    /// Queue an unconfigured-backend failure.
    pub fn then_unconfigured(self) -> Self {
        self.script
            .write()
            .unwrap()
            .push_back(Scripted::Unconfigured);
        self
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }

    /// Prompts received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

impl Clone for MockCompletion {
    fn clone(&self) -> Self {
        Self {
            script: Arc::clone(&self.script),
            prompts: Arc::clone(&self.prompts),
        }
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        self.prompts.write().unwrap().push(prompt.to_string());

        match self.script.write().unwrap().pop_front() {
            Some(Scripted::Text(text)) => Ok(text),
            Some(Scripted::RateLimited) => Err(CompletionError::RateLimited),
            Some(Scripted::Api { status, message }) => {
                Err(CompletionError::Api { status, message })
            }
            Some(Scripted::Unconfigured) => Err(CompletionError::Unconfigured),
            None => Err(CompletionError::Api {
                status: 0,
                message: "mock script exhausted".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_consumed_in_order() {
        let mock = MockCompletion::new()
            .then_text("first")
            .then_rate_limited()
            .then_text("second");

        assert_eq!(mock.complete("a").await.unwrap(), "first");
        assert!(matches!(
            mock.complete("b").await.unwrap_err(),
            CompletionError::RateLimited
        ));
        assert_eq!(mock.complete("c").await.unwrap(), "second");
        assert_eq!(mock.prompts(), vec!["a", "b", "c"]);
    }
}
