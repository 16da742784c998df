//! Keyword presence scoring against the extracted resume text

use crate::matching::partial_ratio::partial_ratio;
use serde::{Deserialize, Serialize};

/// Per-keyword scores plus the matched subset. `scores` preserves the
/// input keyword order; `matched` is the filtered subset in that same
/// order. Deterministic for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub matched: Vec<String>,
    pub scores: Vec<(String, u8)>,
}

/// Score every keyword's presence in `text` via case-folded partial-ratio
/// similarity. A keyword is matched iff its score reaches `threshold`.
pub fn match_keywords(text: &str, keywords: &[String], threshold: u8) -> MatchOutcome {
    let folded_text = text.to_lowercase();

    let mut matched = Vec::new();
    let mut scores = Vec::with_capacity(keywords.len());

    for keyword in keywords {
        let score = partial_ratio(&keyword.to_lowercase(), &folded_text);
        if score >= threshold {
            matched.push(keyword.clone());
        }
        scores.push((keyword.clone(), score));
    }

    MatchOutcome { matched, scores }
}
