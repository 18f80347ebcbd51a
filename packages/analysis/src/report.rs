//! Report assembly.
//!
//! Pure formatting: header (title + link), the three stage sections in
//! pipeline order, and a generation-timestamp footer. Stage text is
//! embedded verbatim.

use chrono::Utc;

use crate::types::{AnalysisReport, Stage, StageResult};

/// Build the immutable report from the three stage outputs.
pub fn assemble(
    title: impl Into<String>,
    url: impl Into<String>,
    analysis1: impl Into<String>,
    analysis2: impl Into<String>,
    analysis3: impl Into<String>,
) -> AnalysisReport {
    AnalysisReport {
        title: title.into(),
        url: url.into(),
        stages: vec![
            StageResult::new(Stage::BiasNuance, analysis1),
            StageResult::new(Stage::AudienceSegmentation, analysis2),
            StageResult::new(Stage::Intentionality, analysis3),
        ],
        generated_at: Utc::now(),
    }
}

impl AnalysisReport {
    /// Render the report as one markdown document.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("# TrueEye Analysis\n\n");
        out.push_str(&format!("## {}\n", self.title));
        out.push_str(&format!("[{}]({})\n", self.url, self.url));

        for (index, stage_result) in self.stages.iter().enumerate() {
            out.push_str("\n---\n\n");
            out.push_str(&format!(
                "## {}. {}\n",
                index + 1,
                stage_result.stage.heading()
            ));
            out.push_str(&stage_result.text);
            out.push('\n');
        }

        out.push_str("\n---\n\n");
        out.push_str(&format!(
            "*Generated on {} UTC*\n",
            self.generated_at.format("%Y-%m-%d %H:%M")
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_in_pipeline_order() {
        let report = assemble(
            "Sample Article",
            "https://example.com/article",
            "bias output",
            "audience output",
            "intent output",
        );
        let rendered = report.render();

        let bias = rendered.find("## 1. Bias, Nuance & Verification").unwrap();
        let audience = rendered.find("## 2. Audience Segmentation").unwrap();
        let intent = rendered.find("## 3. Intent & Manipulation").unwrap();
        assert!(bias < audience);
        assert!(audience < intent);
    }

    #[test]
    fn test_header_has_title_and_link() {
        let report = assemble("Sample Article", "https://example.com/a", "1", "2", "3");
        let rendered = report.render();

        assert!(rendered.contains("## Sample Article"));
        assert!(rendered.contains("[https://example.com/a](https://example.com/a)"));
    }

    #[test]
    fn test_stage_text_embedded_verbatim() {
        let text = "line one\n\n* bullet with `code` and **emphasis**";
        let report = assemble("T", "https://example.com", text, "x", "y");
        assert!(report.render().contains(text));
    }

    #[test]
    fn test_footer_has_timestamp() {
        let report = assemble("T", "https://example.com", "1", "2", "3");
        let rendered = report.render();
        let expected = format!(
            "*Generated on {} UTC*",
            report.generated_at.format("%Y-%m-%d %H:%M")
        );
        assert!(rendered.ends_with(&format!("{}\n", expected)));
    }
}
