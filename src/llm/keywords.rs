//! Role keyword generation

use crate::config::Config;
use crate::error::Result;
use crate::llm::client::ChatCompletion;
use crate::llm::parser;
use crate::llm::prompts;
use log::{info, warn};

/// Ask the capability for the top role-relevant keywords.
///
/// Malformed model output never fails the call: a reply that is not a JSON
/// array of strings is re-read by the freeform tokenizer, and the worst
/// case is an empty list. Only transport failures propagate.
pub async fn generate_role_keywords<C: ChatCompletion>(
    client: &C,
    config: &Config,
    role: &str,
) -> Result<Vec<String>> {
    let top_k = config.matching.keyword_top_k;
    let reply = client.complete(&prompts::keyword_prompt(role, top_k)).await?;

    let keywords = parse_keyword_reply(&reply, top_k);
    info!("Generated {} keywords for role '{}'", keywords.len(), role);
    Ok(keywords)
}

fn parse_keyword_reply(reply: &str, top_k: usize) -> Vec<String> {
    if let Some(parsed) = parser::parse_json::<Vec<String>>(reply) {
        return parsed
            .into_iter()
            .map(|kw| kw.trim().to_string())
            .filter(|kw| !kw.is_empty())
            .collect();
    }

    warn!("Keyword reply was not a JSON array, falling back to freeform tokenizer");
    parser::tokenize_freeform(reply, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_array() {
        let keywords = parse_keyword_reply(r#"["Python", " SQL ", ""]"#, 25);
        assert_eq!(keywords, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_fenced_array() {
        let keywords = parse_keyword_reply("```json\n[\"Rust\", \"Tokio\"]\n```", 25);
        assert_eq!(keywords, vec!["Rust", "Tokio"]);
    }

    #[test]
    fn test_freeform_fallback() {
        let keywords = parse_keyword_reply("Python, SQL\n\u{2022} Docker", 25);
        assert_eq!(keywords, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_freeform_fallback_truncates_to_top_k() {
        let keywords = parse_keyword_reply("a, b, c, d, e", 3);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_hopeless_reply_yields_empty_list() {
        let keywords = parse_keyword_reply("", 25);
        assert!(keywords.is_empty());
    }
}
