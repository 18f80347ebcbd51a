//! Configuration for the analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::prompts::PromptTemplates;

/// Pipeline configuration, constructed once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fetched text below this length is reported as too short to analyze
    /// rather than run through the stages. Default: 100.
    pub min_content_chars: usize,

    /// Prompt templates for the three stages.
    #[serde(default)]
    pub prompts: PromptTemplates,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_content_chars: 100,
            prompts: PromptTemplates::default(),
        }
    }
}
