//! Input processing module
//! Handles file type detection, text extraction, and format fallback

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::{extract_document, ExtractedDocument};
