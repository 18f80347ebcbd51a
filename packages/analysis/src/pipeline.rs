//! The three-stage analysis pipeline.
//!
//! Strictly sequential: the intent stage's prompt is built from the outputs
//! of the bias and audience stages, so stages never run in parallel and a
//! failure aborts everything after it. Retries happen inside the completion
//! service and are invisible here.

use std::sync::Arc;
use tracing::{error, info};

use crate::config::PipelineConfig;
use crate::error::{AnalysisError, CompletionError, Result};
use crate::report::assemble;
use crate::traits::{CompletionService, ContentFetcher};
use crate::types::{AnalysisReport, Stage};
use crate::url::normalize_url;

/// Outcome of a completed analysis run.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// All three stages succeeded
    Report(AnalysisReport),
    /// Fetched text was below the minimum length; no stage ran.
    /// A legitimate non-error outcome, not a fault.
    ContentTooShort,
}

/// Orchestrates fetch plus the three completion stages for one request.
///
/// Holds no mutable state; one instance serves concurrent requests.
pub struct AnalysisPipeline {
    fetcher: Arc<dyn ContentFetcher>,
    completion: Arc<dyn CompletionService>,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    pub fn new(
        fetcher: Arc<dyn ContentFetcher>,
        completion: Arc<dyn CompletionService>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            fetcher,
            completion,
            config,
        }
    }

    /// Run the full analysis for a raw URL.
    ///
    /// Validation and fetch failures propagate as errors; short content is
    /// a successful [`AnalysisOutcome::ContentTooShort`].
    pub async fn analyze(&self, raw_url: &str) -> Result<AnalysisOutcome> {
        let url = normalize_url(raw_url)?;
        info!(url = %url, fetcher = self.fetcher.name(), "Starting analysis");

        let document = self.fetcher.fetch(&url).await.map_err(|e| {
            error!(url = %url, error = %e, "Content fetch failed");
            AnalysisError::from(e)
        })?;

        let content_chars = document.text.chars().count();
        if content_chars < self.config.min_content_chars {
            info!(
                url = %url,
                content_chars = content_chars,
                min_content_chars = self.config.min_content_chars,
                "Content too short to analyze"
            );
            return Ok(AnalysisOutcome::ContentTooShort);
        }

        info!(
            url = %url,
            title = %document.title,
            content_chars = content_chars,
            "Content extracted"
        );

        let prompts = &self.config.prompts;

        let analysis1 = self
            .run_stage(Stage::BiasNuance, &url, &prompts.render_bias(&document.text))
            .await?;

        let analysis2 = self
            .run_stage(
                Stage::AudienceSegmentation,
                &url,
                &prompts.render_audience(&document.text),
            )
            .await?;

        let analysis3 = self
            .run_stage(
                Stage::Intentionality,
                &url,
                &prompts.render_intent(&document.text, &analysis1, &analysis2),
            )
            .await?;

        info!(url = %url, "Analysis completed");

        Ok(AnalysisOutcome::Report(assemble(
            document.title,
            url,
            analysis1,
            analysis2,
            analysis3,
        )))
    }

    /// Run one completion stage, mapping backend failures to pipeline errors.
    async fn run_stage(&self, stage: Stage, url: &str, prompt: &str) -> Result<String> {
        info!(url = %url, stage = %stage, "Running analysis stage");

        self.completion.complete(prompt).await.map_err(|e| {
            error!(url = %url, stage = %stage, error = %e, "Analysis stage failed");
            match e {
                CompletionError::Unconfigured => AnalysisError::ServiceUnavailable,
                source => AnalysisError::Stage { stage, source },
            }
        })
    }
}
