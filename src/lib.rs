//! ATS resume analysis pipeline
//!
//! Extracts text from an uploaded resume, derives role keywords through an
//! external text-generation capability, fuzzy-matches them against the
//! document, collects grammar/format critique and skill-gap suggestions,
//! and aggregates everything into a single 0-100 ATS score.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod matching;
pub mod report;
pub mod scoring;

pub use analyzer::Analyzer;
pub use config::Config;
pub use error::{AtsError, Result};
pub use llm::{ChatCompletion, ChatMessage, GroqClient};
pub use report::AnalysisReport;
