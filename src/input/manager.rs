//! Extraction dispatch with graceful format fallback

use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Plain text pulled out of an uploaded document, plus the format that
/// actually produced it. Built once per request and immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
    pub format: String,
}

/// Extract text from uploaded bytes, dispatching on the filename suffix.
///
/// An absent or unrecognized suffix triggers the fallback chain
/// PDF -> DOCX -> lossy UTF-8 decode. Extraction never fails: each
/// attempt's error is swallowed and the next strategy is tried, so the
/// worst case is a lossy decode of the raw bytes.
pub fn extract_document(filename: &str, bytes: &[u8]) -> ExtractedDocument {
    let file_type = FileType::from_filename(filename);

    match file_type {
        FileType::Pdf => {
            info!("Extracting text from PDF: {}", filename);
            let text = PdfExtractor.extract(bytes).unwrap_or_default();
            ExtractedDocument {
                text,
                format: file_type.label().to_string(),
            }
        }
        FileType::Docx => {
            info!("Extracting text from DOCX: {}", filename);
            let text = DocxExtractor.extract(bytes).unwrap_or_default();
            ExtractedDocument {
                text,
                format: file_type.label().to_string(),
            }
        }
        FileType::Text => {
            info!("Decoding plain text file: {}", filename);
            let text = PlainTextExtractor.extract(bytes).unwrap_or_default();
            ExtractedDocument {
                text,
                format: file_type.label().to_string(),
            }
        }
        FileType::Unknown => {
            warn!("Unrecognized file type for '{}', trying fallback chain", filename);
            extract_with_fallback(bytes)
        }
    }
}

/// PDF -> DOCX -> lossy text decode. A PDF attempt that yields only
/// whitespace counts as a failure so image-only PDFs keep falling through.
fn extract_with_fallback(bytes: &[u8]) -> ExtractedDocument {
    match PdfExtractor.extract(bytes) {
        Ok(text) if !text.trim().is_empty() => {
            debug!("Fallback chain succeeded with PDF extraction");
            return ExtractedDocument {
                text,
                format: FileType::Pdf.label().to_string(),
            };
        }
        Ok(_) => debug!("PDF fallback produced no text, advancing"),
        Err(e) => debug!("PDF fallback failed: {}", e),
    }

    match DocxExtractor.extract(bytes) {
        Ok(text) => {
            debug!("Fallback chain succeeded with DOCX extraction");
            return ExtractedDocument {
                text,
                format: FileType::Docx.label().to_string(),
            };
        }
        Err(e) => debug!("DOCX fallback failed: {}", e),
    }

    let text = PlainTextExtractor.extract(bytes).unwrap_or_default();
    ExtractedDocument {
        text,
        format: FileType::Text.label().to_string(),
    }
}
