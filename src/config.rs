//! Configuration for the ATS analysis pipeline

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chat: ChatConfig,
    pub matching: MatchingConfig,
    pub scoring: ScoringConfig,
    pub limits: LimitsConfig,
    pub degraded: DegradedDefaults,
}

/// Settings for the external text-generation capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Partial-ratio score a keyword needs to count as present (0-100).
    pub threshold: u8,
    /// How many role keywords to request from the generator.
    pub keyword_top_k: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub grammar_weight: f64,
    pub format_weight: f64,
}

/// Payload caps for the chat calls. These bound request size, nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub grammar_input_chars: usize,
    pub skill_gap_input_chars: usize,
    pub missing_keyword_cap: usize,
}

/// Canonical fallback values substituted when a chat response cannot be
/// parsed. Every parse-failure literal in the pipeline comes from here so
/// tests have a single source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradedDefaults {
    pub fallback_score: u8,
    pub fallback_feedback: String,
    pub suggestion_count: usize,
    pub priority_keyword_cap: usize,
    pub placeholder_keyword: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chat: ChatConfig {
                base_url: "https://api.groq.com/openai/v1".to_string(),
                model: "llama-3.3-70b-versatile".to_string(),
                temperature: 0.2,
                max_tokens: 2048,
            },
            matching: MatchingConfig {
                threshold: 70,
                keyword_top_k: 25,
            },
            scoring: ScoringConfig {
                keyword_weight: 0.6,
                grammar_weight: 0.2,
                format_weight: 0.2,
            },
            limits: LimitsConfig {
                grammar_input_chars: 15_000,
                skill_gap_input_chars: 12_000,
                missing_keyword_cap: 50,
            },
            degraded: DegradedDefaults::default(),
        }
    }
}

impl Default for DegradedDefaults {
    fn default() -> Self {
        Self {
            fallback_score: 60,
            fallback_feedback:
                "Could not parse structured feedback from model; check API output.".to_string(),
            suggestion_count: 6,
            priority_keyword_cap: 10,
            placeholder_keyword: "relevant skill".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = Config::default();
        let total = config.scoring.keyword_weight
            + config.scoring.grammar_weight
            + config.scoring.format_weight;
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_matching_settings() {
        let config = Config::default();
        assert_eq!(config.matching.threshold, 70);
        assert_eq!(config.matching.keyword_top_k, 25);
        assert_eq!(config.degraded.fallback_score, 60);
    }
}
