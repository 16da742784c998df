//! Fuzzy keyword matching module

pub mod matcher;
pub mod partial_ratio;

pub use matcher::{match_keywords, MatchOutcome};
pub use partial_ratio::partial_ratio;
