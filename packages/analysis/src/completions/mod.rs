//! Completion service implementations.

pub mod anthropic;
pub mod mock;
pub mod retry;

pub use anthropic::AnthropicClient;
pub use mock::MockCompletion;
pub use retry::RetryingCompletion;
