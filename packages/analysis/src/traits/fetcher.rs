//! Content fetcher trait.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::FetchedDocument;

/// Turns a URL into extracted plain text and a title.
///
/// Implementations enforce their own size cap and network timeout; the
/// pipeline only sees the bounded document or a classified failure.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch and extract readable content from a URL.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedDocument>;

    /// Implementation name, for logging.
    fn name(&self) -> &str;
}
