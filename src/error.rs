//! Error handling for the ATS analysis pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Chat completion transport error: {0}")]
    Transport(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AtsError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsError {
    fn from(err: anyhow::Error) -> Self {
        AtsError::Transport(err.to_string())
    }
}
