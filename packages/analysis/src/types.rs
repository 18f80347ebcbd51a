//! Value types shared across the pipeline.
//!
//! Everything here is request-scoped; nothing is persisted or cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Plain text and title extracted from a fetched page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedDocument {
    /// Extracted text, whitespace-collapsed and length-capped
    pub text: String,
    /// Page title, `"Untitled"` when the page has none
    pub title: String,
}

impl FetchedDocument {
    pub fn new(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
        }
    }
}

/// The three analysis stages, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Bias, emotional nuance and fact verification
    BiasNuance,
    /// Demographic and psychographic audience targeting
    AudienceSegmentation,
    /// Intent and manipulation synthesis (consumes the first two)
    Intentionality,
}

impl Stage {
    /// Section heading used by the report assembler.
    pub fn heading(&self) -> &'static str {
        match self {
            Stage::BiasNuance => "Bias, Nuance & Verification",
            Stage::AudienceSegmentation => "Audience Segmentation",
            Stage::Intentionality => "Intent & Manipulation",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::BiasNuance => "bias-nuance",
            Stage::AudienceSegmentation => "audience-segmentation",
            Stage::Intentionality => "intentionality",
        };
        write!(f, "{}", name)
    }
}

/// Output of one completed stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageResult {
    pub stage: Stage,
    pub text: String,
}

impl StageResult {
    pub fn new(stage: Stage, text: impl Into<String>) -> Self {
        Self {
            stage,
            text: text.into(),
        }
    }
}

/// The assembled analysis, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub title: String,
    pub url: String,
    /// Stage results in pipeline order
    pub stages: Vec<StageResult>,
    pub generated_at: DateTime<Utc>,
}
