//! Mock fetcher for testing.
//!
//! Canned documents per URL, injectable failures, and call recording.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::ContentFetcher;
use crate::types::FetchedDocument;

/// Mock fetcher for testing.
///
/// # Example
///
/// ```rust
/// use analysis::fetchers::MockFetcher;
/// use analysis::types::FetchedDocument;
///
/// let mock = MockFetcher::new()
///     .with_document("https://example.com", FetchedDocument::new("body text", "Title"));
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned documents indexed by URL
    documents: Arc<RwLock<HashMap<String, FetchedDocument>>>,
    /// Error returned for URLs without a canned document
    failure: Arc<RwLock<Option<FetchErrorKind>>>,
    /// URLs requested, in order
    calls: Arc<RwLock<Vec<String>>>,
}

/// Cloneable stand-in for `FetchError`, which is not `Clone`.
#[derive(Debug, Clone)]
enum FetchErrorKind {
    Timeout,
    Connection(String),
    Http(u16),
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document that will be returned for a URL.
    pub fn add_document(&self, url: impl Into<String>, doc: FetchedDocument) {
        self.documents.write().unwrap().insert(url.into(), doc);
    }

    /// Builder form of [`add_document`](Self::add_document).
    pub fn with_document(self, url: impl Into<String>, doc: FetchedDocument) -> Self {
        self.add_document(url, doc);
        self
    }

    /// Fail unmatched URLs with a timeout.
    pub fn with_timeout(self) -> Self {
        *self.failure.write().unwrap() = Some(FetchErrorKind::Timeout);
        self
    }

    /// Fail unmatched URLs with a connection error.
    pub fn with_connection_error(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(FetchErrorKind::Connection(message.into()));
        self
    }

    /// Fail unmatched URLs with an HTTP status error.
    pub fn with_http_status(self, status: u16) -> Self {
        *self.failure.write().unwrap() = Some(FetchErrorKind::Http(status));
        self
    }

    /// Number of fetch calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// URLs requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            failure: Arc::clone(&self.failure),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedDocument> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(doc) = self.documents.read().unwrap().get(url) {
            return Ok(doc.clone());
        }

        match self.failure.read().unwrap().clone() {
            Some(FetchErrorKind::Timeout) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
            Some(FetchErrorKind::Connection(message)) => Err(FetchError::Connection(message)),
            Some(FetchErrorKind::Http(status)) => Err(FetchError::Http {
                status,
                url: url.to_string(),
            }),
            None => Err(FetchError::Connection(format!(
                "no canned document for {}",
                url
            ))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
