//! Two-stage parsing of model output
//!
//! Stage one is a strict JSON decode; stage two is a declared heuristic
//! tokenizer for freeform replies. The two stages are independent, named
//! functions so each can be tested on its own.

use regex::Regex;
use serde::de::DeserializeOwned;

/// Strict stage: decode `raw` as JSON, tolerating code-fence wrapping and
/// extra prose around the value. Returns `None` when no decodable JSON is
/// present.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    if let Ok(value) = serde_json::from_str(raw.trim()) {
        return Some(value);
    }

    let stripped = strip_code_fences(raw);
    if let Ok(value) = serde_json::from_str(stripped.trim()) {
        return Some(value);
    }

    find_json_span(&stripped).and_then(|span| serde_json::from_str(span).ok())
}

/// Remove Markdown code-fence markers, keeping the fenced content.
pub fn strip_code_fences(raw: &str) -> String {
    let re = Regex::new(r"```[a-zA-Z]*").unwrap();
    re.replace_all(raw, "").to_string()
}

/// The widest substring that starts at the first `{`/`[` and ends at the
/// last matching `}`/`]`, if any.
fn find_json_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let close = match text.as_bytes()[start] {
        b'{' => '}',
        _ => ']',
    };
    let end = text.rfind(close)?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}

/// Heuristic stage: treat the reply as a delimited list. Fences and
/// newlines are collapsed, then the text is split on a Unicode
/// bullet/delimiter class, trimmed, and truncated to `limit` entries.
pub fn tokenize_freeform(raw: &str, limit: usize) -> Vec<String> {
    let cleaned = strip_code_fences(raw).replace('\n', ",");

    let splitter = Regex::new(r"[,;\u{2022}\u{2023}\u{25AA}\u{00B7}-]+").unwrap();
    splitter
        .split(&cleaned)
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_json_array() {
        let parsed: Vec<String> = parse_json(r#"["Python", "SQL"]"#).unwrap();
        assert_eq!(parsed, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"grammar_score\": 85}\n```";
        let parsed: serde_json::Value = parse_json(raw).unwrap();
        assert_eq!(parsed["grammar_score"], 85);
    }

    #[test]
    fn test_parse_json_with_surrounding_prose() {
        let raw = "Sure! Here is the list you asked for:\n[\"Docker\", \"AWS\"]\nHope that helps.";
        let parsed: Vec<String> = parse_json(raw).unwrap();
        assert_eq!(parsed, vec!["Docker", "AWS"]);
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let parsed: Option<Vec<String>> = parse_json("just some words");
        assert!(parsed.is_none());
    }

    #[test]
    fn test_tokenize_commas_and_bullets() {
        let raw = "Python, SQL; Docker\n\u{2022} Kubernetes \u{2022} AWS";
        let tokens = tokenize_freeform(raw, 10);
        assert_eq!(tokens, vec!["Python", "SQL", "Docker", "Kubernetes", "AWS"]);
    }

    #[test]
    fn test_tokenize_respects_limit() {
        let tokens = tokenize_freeform("a, b, c, d", 2);
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_drops_empty_parts() {
        let tokens = tokenize_freeform(",, ;; \n", 10);
        assert!(tokens.is_empty());
    }
}
