//! Collaborator seams for the pipeline.

pub mod completion;
pub mod fetcher;

pub use completion::CompletionService;
pub use fetcher::ContentFetcher;
