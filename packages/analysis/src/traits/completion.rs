//! Completion service trait.

use async_trait::async_trait;

use crate::error::CompletionResult;

/// Turns a prompt into generated text via a remote completion backend.
///
/// Errors are classified structurally (see [`crate::error::CompletionError`])
/// so callers can decide whether a failure is retryable by matching on the
/// variant.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Generate text for a prompt.
    async fn complete(&self, prompt: &str) -> CompletionResult<String>;
}
