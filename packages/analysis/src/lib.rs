//! Media literacy analysis pipeline.
//!
//! Given a URL, fetches the page's readable text and runs three sequential
//! LLM analysis passes over it:
//!
//! 1. Bias, nuance and fact verification
//! 2. Audience segmentation
//! 3. Intent and manipulation (consumes the first two outputs)
//!
//! The results are assembled into one markdown report. Collaborators sit
//! behind two narrow seams, [`ContentFetcher`] and [`CompletionService`],
//! with recording mocks exported for downstream tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use analysis::{
//!     AnalysisPipeline, AnthropicClient, HttpFetcher, PipelineConfig,
//!     RetryingCompletion,
//! };
//!
//! let completion = RetryingCompletion::new(AnthropicClient::from_env());
//! let pipeline = AnalysisPipeline::new(
//!     Arc::new(HttpFetcher::new()),
//!     Arc::new(completion),
//!     PipelineConfig::default(),
//! );
//! let outcome = pipeline.analyze("example.com/article").await?;
//! ```

pub mod completions;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod prompts;
pub mod report;
pub mod traits;
pub mod types;
pub mod url;

pub use completions::{AnthropicClient, MockCompletion, RetryingCompletion};
pub use config::PipelineConfig;
pub use error::{AnalysisError, CompletionError, FetchError};
pub use fetchers::{HttpFetcher, MockFetcher};
pub use pipeline::{AnalysisOutcome, AnalysisPipeline};
pub use prompts::PromptTemplates;
pub use report::assemble;
pub use traits::{CompletionService, ContentFetcher};
pub use types::{AnalysisReport, FetchedDocument, Stage, StageResult};
pub use url::normalize_url;
