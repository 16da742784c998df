//! External text-generation capability: client, prompts, response parsing

pub mod client;
pub mod feedback;
pub mod keywords;
pub mod parser;
pub mod prompts;

pub use client::{ChatCompletion, ChatMessage, GroqClient};
pub use feedback::{GrammarFeedback, SkillGap};
