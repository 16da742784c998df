//! Partial-ratio approximate substring similarity

use strsim::generic_levenshtein;
use unicode_segmentation::UnicodeSegmentation;

/// Best alignment similarity (0-100) between the shorter input and any
/// equal-length grapheme window of the longer one. An exact substring
/// scores 100; empty against non-empty scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let (needle_str, haystack_str) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    if needle_str.is_empty() {
        return if haystack_str.is_empty() { 100 } else { 0 };
    }
    if haystack_str.contains(needle_str) {
        return 100;
    }

    let needle: Vec<&str> = needle_str.graphemes(true).collect();
    let haystack: Vec<&str> = haystack_str.graphemes(true).collect();
    if needle.len() > haystack.len() {
        // Grapheme clustering can flip the length order seen on chars;
        // compare whole-to-whole in that case.
        return window_score(&haystack, &needle);
    }

    let mut best = 0;
    for window in haystack.windows(needle.len()) {
        let score = window_score(&needle, &window.to_vec());
        if score > best {
            best = score;
        }
        if best == 100 {
            break;
        }
    }
    best
}

fn window_score(needle: &Vec<&str>, window: &Vec<&str>) -> u8 {
    let len = needle.len().max(window.len());
    let distance = generic_levenshtein(needle, window).min(len);
    (((len - distance) as f64 / len as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_substring_scores_100() {
        assert_eq!(partial_ratio("python", "python is great"), 100);
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(partial_ratio("rust", "rust"), 100);
    }

    #[test]
    fn test_near_miss_scores_high() {
        // One substitution in a six-grapheme window.
        let score = partial_ratio("pythom", "we use python daily");
        assert!(score >= 80, "score was {}", score);
        assert!(score < 100);
    }

    #[test]
    fn test_unrelated_scores_low() {
        let score = partial_ratio("kubernetes", "irrelevant text");
        assert!(score < 70, "score was {}", score);
    }

    #[test]
    fn test_argument_order_is_irrelevant() {
        assert_eq!(
            partial_ratio("sql", "postgresql and more"),
            partial_ratio("postgresql and more", "sql")
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(partial_ratio("", "text"), 0);
        assert_eq!(partial_ratio("", ""), 100);
    }
}
