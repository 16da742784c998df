//! The analysis report returned to the caller
//!
//! The serialized key set is the compatibility boundary for downstream
//! consumers (UI display, file export) and must not change shape.

use crate::error::Result;
use crate::llm::feedback::SkillGap;
use serde::{Deserialize, Serialize};

/// Complete ATS compatibility report for one resume. Built once by the
/// analyzer, immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub candidate_name: String,
    pub file_type: String,
    pub target_role: String,
    pub required_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub keyword_match_percent: f64,
    /// Pairs of `[keyword, score]`, one per required keyword, input order.
    pub keyword_match_scores: Vec<(String, u8)>,
    pub grammar_score: u8,
    pub grammar_feedback: String,
    pub format_score: u8,
    pub format_feedback: String,
    pub missing_keywords: Vec<String>,
    pub skill_gap_suggestions: SkillGap,
    pub ats_score: f64,
}

impl AnalysisReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// First non-blank line of the extracted text, or "Unknown".
pub fn candidate_name_from(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("Unknown")
        .to_string()
}
