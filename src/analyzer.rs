//! Pipeline orchestrator

use crate::config::Config;
use crate::error::Result;
use crate::input;
use crate::llm::client::ChatCompletion;
use crate::llm::{feedback, keywords};
use crate::matching;
use crate::report::{candidate_name_from, AnalysisReport};
use crate::scoring;
use log::info;

/// Runs one resume through the full analysis sequence:
/// extract, generate keywords, match, grammar/format review, skill-gap
/// suggestions, score aggregation.
///
/// Holds no per-request state; concurrent `analyze` calls are independent.
/// Every sub-step degrades gracefully on malformed model output, so the
/// only error this returns is a transport failure from the chat client.
pub struct Analyzer<C: ChatCompletion> {
    client: C,
    config: Config,
}

impl<C: ChatCompletion> Analyzer<C> {
    pub fn new(client: C, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze uploaded resume bytes against a target role and assemble
    /// the full report.
    pub async fn analyze(
        &self,
        filename: &str,
        bytes: &[u8],
        target_role: &str,
    ) -> Result<AnalysisReport> {
        info!("Starting ATS analysis of '{}' for role '{}'", filename, target_role);

        let document = input::extract_document(filename, bytes);
        let candidate_name = candidate_name_from(&document.text);

        let required_keywords =
            keywords::generate_role_keywords(&self.client, &self.config, target_role).await?;

        let outcome = matching::match_keywords(
            &document.text,
            &required_keywords,
            self.config.matching.threshold,
        );
        let keyword_match_percent =
            scoring::keyword_match_percent(outcome.matched.len(), required_keywords.len());

        let grammar =
            feedback::review_grammar_and_format(&self.client, &self.config, &document.text).await?;

        let missing_keywords: Vec<String> = required_keywords
            .iter()
            .filter(|kw| !outcome.matched.contains(kw))
            .cloned()
            .collect();

        let skill_gap = feedback::suggest_skill_gaps(
            &self.client,
            &self.config,
            target_role,
            &missing_keywords,
            &document.text,
        )
        .await?;

        let ats_score = scoring::compute_ats_score(
            &self.config.scoring,
            keyword_match_percent,
            grammar.grammar_score,
            grammar.format_score,
        );

        info!(
            "Analysis complete: {}/{} keywords matched, ATS score {}",
            outcome.matched.len(),
            required_keywords.len(),
            ats_score
        );

        Ok(AnalysisReport {
            candidate_name,
            file_type: document.format,
            target_role: target_role.to_string(),
            required_keywords,
            matched_keywords: outcome.matched,
            keyword_match_percent,
            keyword_match_scores: outcome.scores,
            grammar_score: grammar.grammar_score,
            grammar_feedback: grammar.grammar_feedback,
            format_score: grammar.format_score,
            format_feedback: grammar.format_feedback,
            missing_keywords,
            skill_gap_suggestions: skill_gap,
            ats_score,
        })
    }
}
