//! Grammar/format critique and skill-gap suggestions

use crate::config::{Config, DegradedDefaults};
use crate::error::Result;
use crate::llm::client::ChatCompletion;
use crate::llm::parser;
use crate::llm::prompts;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Grammar and formatting critique of the resume text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarFeedback {
    pub grammar_score: u8,
    pub grammar_feedback: String,
    pub format_score: u8,
    pub format_feedback: String,
}

impl GrammarFeedback {
    /// The fixed degraded state substituted when the reply is unparseable.
    pub fn degraded(defaults: &DegradedDefaults) -> Self {
        Self {
            grammar_score: defaults.fallback_score,
            grammar_feedback: defaults.fallback_feedback.clone(),
            format_score: defaults.fallback_score,
            format_feedback: defaults.fallback_feedback.clone(),
        }
    }
}

/// Raw decode target for the grammar call. Fields are optional so a
/// partially well-formed object still contributes the keys it has; the
/// rest fill in from the degraded defaults.
#[derive(Debug, Deserialize)]
struct RawGrammarFeedback {
    grammar_score: Option<u8>,
    grammar_feedback: Option<String>,
    format_score: Option<u8>,
    format_feedback: Option<String>,
}

impl RawGrammarFeedback {
    fn resolve(self, defaults: &DegradedDefaults) -> GrammarFeedback {
        GrammarFeedback {
            grammar_score: self.grammar_score.unwrap_or(defaults.fallback_score),
            grammar_feedback: self
                .grammar_feedback
                .unwrap_or_else(|| defaults.fallback_feedback.clone()),
            format_score: self.format_score.unwrap_or(defaults.fallback_score),
            format_feedback: self
                .format_feedback
                .unwrap_or_else(|| defaults.fallback_feedback.clone()),
        }
    }
}

/// Actionable skill-gap suggestions conditioned on the missing keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub sample_phrases: Vec<String>,
    #[serde(default)]
    pub priority_keywords: Vec<String>,
}

impl SkillGap {
    /// Deterministic fallback built from the first missing keywords, or a
    /// single placeholder when nothing is missing.
    pub fn degraded(defaults: &DegradedDefaults, missing_keywords: &[String]) -> Self {
        let seeds: Vec<&str> = if missing_keywords.is_empty() {
            vec![defaults.placeholder_keyword.as_str()]
        } else {
            missing_keywords
                .iter()
                .take(defaults.suggestion_count)
                .map(|kw| kw.as_str())
                .collect()
        };

        Self {
            suggestions: seeds.iter().map(|kw| format!("Learn {}", kw)).collect(),
            sample_phrases: seeds.iter().map(|kw| format!("Worked on {}", kw)).collect(),
            priority_keywords: missing_keywords
                .iter()
                .take(defaults.priority_keyword_cap)
                .cloned()
                .collect(),
        }
    }
}

/// Ask for a grammar/format critique of the extracted text. An unparseable
/// reply degrades to the fixed defaults; only transport failures propagate.
pub async fn review_grammar_and_format<C: ChatCompletion>(
    client: &C,
    config: &Config,
    resume_text: &str,
) -> Result<GrammarFeedback> {
    let messages = prompts::grammar_prompt(resume_text, config.limits.grammar_input_chars);
    let reply = client.complete(&messages).await?;

    let feedback = match parser::parse_json::<RawGrammarFeedback>(&reply) {
        Some(raw) => raw.resolve(&config.degraded),
        None => {
            warn!("Grammar reply was not a JSON object, substituting degraded defaults");
            GrammarFeedback::degraded(&config.degraded)
        }
    };

    info!(
        "Grammar review complete (grammar {}, format {})",
        feedback.grammar_score, feedback.format_score
    );
    Ok(feedback)
}

/// Ask for skill-gap suggestions given the role and missing keywords. An
/// unparseable reply degrades to the deterministic "Learn X" fallback.
pub async fn suggest_skill_gaps<C: ChatCompletion>(
    client: &C,
    config: &Config,
    role: &str,
    missing_keywords: &[String],
    resume_text: &str,
) -> Result<SkillGap> {
    let capped = &missing_keywords[..missing_keywords.len().min(config.limits.missing_keyword_cap)];
    let missing_json = serde_json::to_string(capped)?;

    let messages = prompts::skill_gap_prompt(
        role,
        &missing_json,
        resume_text,
        config.limits.skill_gap_input_chars,
    );
    let reply = client.complete(&messages).await?;

    let mut gap = match parser::parse_json::<SkillGap>(&reply) {
        Some(gap) => gap,
        None => {
            warn!("Skill-gap reply was not a JSON object, substituting degraded defaults");
            SkillGap::degraded(&config.degraded, missing_keywords)
        }
    };

    // Honor the data-model bound even when the model over-returns.
    gap.priority_keywords
        .truncate(config.degraded.priority_keyword_cap);

    info!("Skill-gap call produced {} suggestions", gap.suggestions.len());
    Ok(gap)
}
