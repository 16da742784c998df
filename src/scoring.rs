//! ATS score aggregation

use crate::config::ScoringConfig;

/// Share of required keywords that matched, as a percentage rounded to one
/// decimal. The `max(1, ...)` guard keeps an empty keyword set from
/// dividing by zero; it yields 0.0.
pub fn keyword_match_percent(matched_count: usize, required_count: usize) -> f64 {
    let percent = (matched_count as f64 / required_count.max(1) as f64) * 100.0;
    round_one_decimal(percent)
}

/// Weighted composite of keyword coverage, grammar quality, and format
/// quality, clamped to [0, 100] and rounded to one decimal. Pure; inputs
/// are assumed range-valid, clamping is defensive.
pub fn compute_ats_score(
    weights: &ScoringConfig,
    keyword_match_percent: f64,
    grammar_score: u8,
    format_score: u8,
) -> f64 {
    let score = keyword_match_percent * weights.keyword_weight
        + f64::from(grammar_score) * weights.grammar_weight
        + f64::from(format_score) * weights.format_weight;
    round_one_decimal(score.clamp(0.0, 100.0))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn weights() -> ScoringConfig {
        Config::default().scoring
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(compute_ats_score(&weights(), 100.0, 100, 100), 100.0);
        assert_eq!(compute_ats_score(&weights(), 0.0, 0, 0), 0.0);
    }

    #[test]
    fn test_weighted_sum() {
        // 0.6 * 50 + 0.2 * 80 + 0.2 * 70 = 60.0
        assert_eq!(compute_ats_score(&weights(), 50.0, 80, 70), 60.0);
    }

    #[test]
    fn test_monotone_in_each_input() {
        let w = weights();
        let base = compute_ats_score(&w, 40.0, 50, 50);
        assert!(compute_ats_score(&w, 60.0, 50, 50) >= base);
        assert!(compute_ats_score(&w, 40.0, 70, 50) >= base);
        assert!(compute_ats_score(&w, 40.0, 50, 70) >= base);
    }

    #[test]
    fn test_rounded_to_one_decimal() {
        let score = compute_ats_score(&weights(), 33.3, 61, 59);
        assert_eq!((score * 10.0).round() / 10.0, score);
    }

    #[test]
    fn test_keyword_percent_divide_by_zero_guard() {
        assert_eq!(keyword_match_percent(0, 0), 0.0);
    }

    #[test]
    fn test_keyword_percent_rounding() {
        assert_eq!(keyword_match_percent(1, 2), 50.0);
        assert_eq!(keyword_match_percent(1, 3), 33.3);
        assert_eq!(keyword_match_percent(2, 3), 66.7);
    }
}
