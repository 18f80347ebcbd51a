//! Prompt templates for the three analysis stages.
//!
//! Templates are opaque to the pipeline: rendering is plain placeholder
//! substitution and nothing else. The bias and audience templates take
//! `{article}`; the intent template additionally takes `{analysis1}` and
//! `{analysis2}`, the outputs of the first two stages.

use serde::{Deserialize, Serialize};

/// Prompt for the bias and nuance stage.
pub const BIAS_NUANCE_PROMPT: &str = r#"You are an expert in journalism, information science and disinformation.
Your task is to analyze the article below and produce a detailed report.
Do not include internal reasoning or thought processes in your answer; only
return the final structured content.

ARTICLE:
{article}

REQUIRED ANALYSIS:

1. **Bias** - classify the emitter's tone as POSITIVE, NEGATIVE or NEUTRAL,
   with a brief explanation of why.

2. **Nuances** - identify and list every emotional or attitudinal nuance
   present (aggressiveness, sadness, polarization, joy, fear, solidarity,
   distrust, cooperation, or others you detect).

3. **Summary** - a concise, high-quality summary of the article.

4. **Clarifications** - examine the text for fallacies or falsehoods. List
   each one, explain briefly why it is a fallacy, and rebut falsehoods with
   the corresponding evidence.

5. **Sources to contrast** - list reputable fact-checking or primary
   sources a reader could consult to verify the claims, with links where
   known.

Present the result as a professional report in clean markdown."#;

/// Prompt for the audience segmentation stage.
pub const AUDIENCE_SEGMENTATION_PROMPT: &str = r#"You are an expert in psychographics, audience segmentation and media
targeting analysis. Your task is to identify precisely who this content is
aimed at and why. Show only the result, not your reasoning.

CONTENT TO ANALYZE:
{article}

REQUIRED ANALYSIS:

1. **Inferred demographic profile** - probable age range, estimated
   education level, socioeconomic stratum, implied geographic or cultural
   location.

2. **Psychographic profile** - values and beliefs the content assumes,
   fears and aspirations it appeals to, group identities it activates,
   pre-existing biases it exploits.

3. **Microsegmentation indicators** - keywords or cultural references,
   dog whistles or signals aimed at specific groups, intentional exclusions
   (who it is NOT speaking to).

4. **Contextual vulnerability** - the emotional state it presupposes in the
   audience and the expected consumption context.

5. **Targeting strategy** - broad or laser-focused segmentation, whether it
   mobilizes a base or converts the undecided, and what specific action it
   expects to provoke.

Be specific but avoid stereotypes; ground every inference in concrete
textual evidence. Return only the final structured content."#;

/// Prompt for the intent and manipulation stage.
///
/// Consumes the article plus the outputs of the two previous stages.
pub const INTENTIONALITY_PROMPT: &str = r#"You are a forensic analyst of communicative intent, specialized in
detecting hidden agendas and animosity in all its forms. This is the
deepest, synthesizing analysis pass. Show only the result, not your
reasoning.

ORIGINAL CONTENT:
{article}

PREVIOUS REPORTS:
{analysis1}
{analysis2}

REQUIRED ANALYSIS:

1. **Multidimensional intent** - for negative bias: direct animosity,
   selective amplification, scapegoat construction. For positive bias:
   manipulative flattery, omission of critical information, false heroes.
   For neutral bias: animosity by omission, false equivalence, calculated
   indifference.

2. **Architecture of manipulation** - institutional gaslighting,
   construction of alternative realities, weaponized uncertainty,
   exploitation of information fatigue.

3. **Hidden agendas** - who benefits from this narrative, which economic or
   political interests sit behind it, which behavioral changes it seeks,
   who is collaterally harmed.

4. **Strategic omissions** - missing crucial information, questions not
   asked, absent voices, deliberately ignored context.

5. **Danger assessment** - manipulation sophistication (1-10), potential
   for social or individual harm, urgency of educational intervention, and
   groups most at risk. If the target audience includes vulnerable
   populations, raise the level of concern accordingly.

Be relentless in your analysis but fair in your conclusions. Return only
the final structured content in clean markdown."#;

/// The three stage templates, overridable via configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplates {
    pub bias: String,
    pub audience: String,
    pub intent: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            bias: BIAS_NUANCE_PROMPT.to_string(),
            audience: AUDIENCE_SEGMENTATION_PROMPT.to_string(),
            intent: INTENTIONALITY_PROMPT.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Render the bias prompt for an article.
    pub fn render_bias(&self, article: &str) -> String {
        substitute(&self.bias, &[("{article}", article)])
    }

    /// Render the audience prompt for an article.
    pub fn render_audience(&self, article: &str) -> String {
        substitute(&self.audience, &[("{article}", article)])
    }

    /// Render the intent prompt for an article plus both prior analyses.
    pub fn render_intent(&self, article: &str, analysis1: &str, analysis2: &str) -> String {
        substitute(
            &self.intent,
            &[
                ("{article}", article),
                ("{analysis1}", analysis1),
                ("{analysis2}", analysis2),
            ],
        )
    }
}

/// Single-pass placeholder substitution.
///
/// Only placeholders present in the template itself are expanded; tokens
/// that appear inside a substituted value are left untouched, so an article
/// containing the literal text `{analysis1}` cannot inject a prior stage's
/// output into its own slot.
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let next = values
            .iter()
            .filter_map(|(token, value)| rest.find(token).map(|idx| (idx, *token, *value)))
            .min_by_key(|(idx, ..)| *idx);

        match next {
            Some((idx, token, value)) => {
                out.push_str(&rest[..idx]);
                out.push_str(value);
                rest = &rest[idx + token.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bias_substitutes_article() {
        let prompts = PromptTemplates::default();
        let rendered = prompts.render_bias("THE ARTICLE BODY");
        assert!(rendered.contains("THE ARTICLE BODY"));
        assert!(!rendered.contains("{article}"));
    }

    #[test]
    fn test_audience_substitutes_article() {
        let prompts = PromptTemplates::default();
        let rendered = prompts.render_audience("THE ARTICLE BODY");
        assert!(rendered.contains("THE ARTICLE BODY"));
        assert!(!rendered.contains("{article}"));
    }

    #[test]
    fn test_intent_substitutes_all_placeholders() {
        let prompts = PromptTemplates::default();
        let rendered = prompts.render_intent("ARTICLE", "FIRST REPORT", "SECOND REPORT");
        assert!(rendered.contains("ARTICLE"));
        assert!(rendered.contains("FIRST REPORT"));
        assert!(rendered.contains("SECOND REPORT"));
        assert!(!rendered.contains("{article}"));
        assert!(!rendered.contains("{analysis1}"));
        assert!(!rendered.contains("{analysis2}"));
    }

    #[test]
    fn test_placeholder_tokens_inside_article_stay_literal() {
        let prompts = PromptTemplates::default();
        let article = "Quoting the template syntax: {analysis1} and {analysis2}.";
        let rendered = prompts.render_intent(article, "FIRST REPORT", "SECOND REPORT");

        // The article's literal tokens survive; the template's own slots
        // are still filled exactly once each.
        assert!(rendered.contains("Quoting the template syntax: {analysis1} and {analysis2}."));
        assert_eq!(rendered.matches("FIRST REPORT").count(), 1);
        assert_eq!(rendered.matches("SECOND REPORT").count(), 1);
    }

    #[test]
    fn test_placeholder_tokens_inside_analyses_stay_literal() {
        let prompts = PromptTemplates::default();
        let rendered = prompts.render_intent("ARTICLE BODY", "report citing {article}", "B");

        assert!(rendered.contains("report citing {article}"));
        assert_eq!(rendered.matches("ARTICLE BODY").count(), 1);
    }

    #[test]
    fn test_custom_templates() {
        let prompts = PromptTemplates {
            bias: "analyze: {article}".into(),
            audience: "target: {article}".into(),
            intent: "intent: {article} / {analysis1} / {analysis2}".into(),
        };
        assert_eq!(prompts.render_bias("X"), "analyze: X");
        assert_eq!(prompts.render_intent("X", "A", "B"), "intent: X / A / B");
    }
}
