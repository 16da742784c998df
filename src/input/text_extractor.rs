//! Text extraction from various file formats
//!
//! Extractors operate on raw uploaded bytes and are pure: no filesystem
//! access, no side effects.

use crate::error::{AtsError, Result};
use regex::Regex;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            AtsError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let cursor = Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            AtsError::DocxExtraction(format!("Not a valid DOCX container: {}", e))
        })?;

        let mut document = archive.by_name("word/document.xml").map_err(|e| {
            AtsError::DocxExtraction(format!("Missing word/document.xml: {}", e))
        })?;

        let mut xml = String::new();
        document
            .read_to_string(&mut xml)
            .map_err(|e| AtsError::DocxExtraction(format!("Unreadable document.xml: {}", e)))?;

        Ok(self.xml_to_text(&xml))
    }
}

impl DocxExtractor {
    /// Flatten WordprocessingML to plain text: paragraph ends become
    /// newlines, all other markup is stripped, blank paragraphs dropped.
    fn xml_to_text(&self, xml: &str) -> String {
        let text = xml
            .replace("</w:p>", "\n")
            .replace("<w:br/>", "\n")
            .replace("<w:tab/>", "\t");

        let re = Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let clean_text = clean_text
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Lossy on purpose: undecodable bytes become replacement characters
        // rather than failing the request.
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_lossy_decode() {
        let bytes = b"Experienced \xFF developer";
        let text = PlainTextExtractor.extract(bytes).unwrap();
        assert!(text.starts_with("Experienced "));
        assert!(text.ends_with(" developer"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_docx_xml_flattening() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>John Doe</w:t></w:r></w:p><w:p></w:p><w:p><w:r><w:t>Python &amp; Rust</w:t></w:r></w:p></w:body></w:document>"#;
        let text = DocxExtractor.xml_to_text(xml);
        assert_eq!(text, "John Doe\nPython & Rust");
    }

    #[test]
    fn test_docx_rejects_garbage() {
        let result = DocxExtractor.extract(b"definitely not a zip");
        assert!(result.is_err());
    }

    #[test]
    fn test_pdf_rejects_garbage() {
        let result = PdfExtractor.extract(b"definitely not a pdf");
        assert!(result.is_err());
    }
}
