//! Typed errors for the analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure class when deciding how to surface it.

use thiserror::Error;

use crate::types::Stage;

/// Errors that can occur while running an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// URL was empty or did not pass the host-pattern check
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Content fetch failed before any stage began
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Completion backend has no credential configured
    #[error("analysis service not configured")]
    ServiceUnavailable,

    /// A completion stage failed and aborted the pipeline
    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: CompletionError,
    },
}

/// Errors that can occur while fetching page content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request exceeded the fetch timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Connection-level failure (DNS, refused, reset)
    #[error("connection error: {0}")]
    Connection(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Response body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors from the completion backend, classified structurally so the
/// retry decision is a variant match rather than substring inspection.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key configured; retrying cannot fix this
    #[error("completion service not configured")]
    Unconfigured,

    /// Transient rate limit; safe to retry with backoff
    #[error("rate limited by completion service")]
    RateLimited,

    /// Non-2xx API response that is not a rate limit
    #[error("completion API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure (connection, timeout)
    #[error("completion network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape
    #[error("completion parse error: {0}")]
    Parse(String),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for completion operations.
pub type CompletionResult<T> = std::result::Result<T, CompletionError>;
