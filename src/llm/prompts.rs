//! Prompt construction for the three analysis calls

use crate::llm::client::ChatMessage;

/// Truncate to at most `max_chars` characters without splitting a
/// character. Caps request payload size; not configurable per call.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn keyword_prompt(role: &str, top_k: usize) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "You are an expert hiring manager and career coach who outputs JSON only.",
        ),
        ChatMessage::user(format!(
            "List the top {top_k} specific technical skills, tools, technologies, and important \
             soft skills and keywords that should appear in a resume for the role: '{role}'. \
             Return a JSON array of strings only, e.g. [\"Python\",\"SQL\",...]. \
             Do not add extra commentary."
        )),
    ]
}

pub fn grammar_prompt(resume_text: &str, max_chars: usize) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a professional resume editor. Output JSON only."),
        ChatMessage::user(format!(
            "You will receive the plain text of a resume. Provide:\n\
             1) a grammar_score (integer 0-100) representing grammar & clarity (100 is perfect);\n\
             2) grammar_feedback: short bullet suggestions to fix grammar/clarity;\n\
             3) a format_score (integer 0-100) representing formatting & organization (100 is perfect);\n\
             4) format_feedback: short bullet suggestions to improve layout, section order, \
             consistency, and readability.\n\
             Return a JSON object exactly with keys: grammar_score, grammar_feedback, \
             format_score, format_feedback.\n\n\
             Resume text (below):\n\n{}",
            truncate_chars(resume_text, max_chars)
        )),
    ]
}

pub fn skill_gap_prompt(
    role: &str,
    missing_keywords_json: &str,
    resume_text: &str,
    max_chars: usize,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "You are a pragmatic career coach focused on action items for students and \
             early-career professionals. Output JSON only.",
        ),
        ChatMessage::user(format!(
            "Given the resume text and the target role, provide:\n\
             1) suggestions: a list of 6 actionable recommendations (projects, courses, \
             certificates) to close skill gaps for this role.\n\
             2) sample_phrases: 6 specific resume bullet phrases the candidate can add to \
             demonstrate the suggested skills (use numbers when possible).\n\
             3) priority_keywords: list up to 10 most important missing keywords to add now.\n\n\
             Role: {role}\n\
             Missing keywords: {missing_keywords_json}\n\
             Resume text (truncated):\n\n{}",
            truncate_chars(resume_text, max_chars)
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "r\u{00E9}sum\u{00E9} text";
        assert_eq!(truncate_chars(text, 6), "r\u{00E9}sum\u{00E9}");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_keyword_prompt_shape() {
        let messages = keyword_prompt("Data Engineer", 25);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.contains("Data Engineer"));
        assert!(messages[1].content.contains("top 25"));
    }

    #[test]
    fn test_grammar_prompt_truncates_resume() {
        let long_text = "q".repeat(50);
        let messages = grammar_prompt(&long_text, 10);
        let payload_len = messages[1].content.chars().filter(|c| *c == 'q').count();
        assert_eq!(payload_len, 10);
        assert!(messages[1].content.contains("grammar_score"));
    }

    #[test]
    fn test_skill_gap_prompt_embeds_missing_keywords() {
        let messages = skill_gap_prompt("Backend Dev", r#"["Docker"]"#, "resume", 100);
        assert!(messages[1].content.contains(r#"["Docker"]"#));
        assert!(messages[1].content.contains("priority_keywords"));
    }
}
