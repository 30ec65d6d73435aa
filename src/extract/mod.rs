//! Document text extraction.
//!
//! Each supported document kind implements [`TextExtractor`]. The kind is
//! detected from the upload's MIME type, with the file extension as a hint
//! for images.

mod image;
mod pdf;

pub use image::{is_ocr_available, ImageExtractor, DEFAULT_OCR_LANGUAGE};
pub use pdf::PdfExtractor;

use std::path::Path;

use crate::errors::ExtractionError;

/// Result type alias for extraction.
pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["pdf", "png", "jpg", "jpeg", "txt"];

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Kinds of document the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Image,
    PlainText,
}

impl DocumentKind {
    /// Detect the kind from a MIME type and file name.
    pub fn detect(mime_type: &str, filename: &str) -> Option<Self> {
        let mime = mime_type.to_lowercase();
        if mime.contains("pdf") {
            Some(Self::Pdf)
        } else if mime.contains("image")
            || extension(filename).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        {
            Some(Self::Image)
        } else if mime.starts_with("text/") {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::PlainText => "text",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercased extension of `filename`, if any.
fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// Whether an upload with this file name is accepted.
pub fn allowed_file(filename: &str) -> bool {
    extension(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Trait for kind-specific text extractors.
pub trait TextExtractor {
    /// Extract the document's text from raw bytes.
    fn extract(&self, data: &[u8]) -> ExtractionResult<String>;

    /// The kind this extractor handles.
    fn kind(&self) -> DocumentKind;
}

/// Get the extractor for a document kind.
pub fn extractor_for(kind: DocumentKind) -> Box<dyn TextExtractor + Send + Sync> {
    match kind {
        DocumentKind::Pdf => Box::new(PdfExtractor),
        DocumentKind::Image => Box::new(ImageExtractor::new()),
        DocumentKind::PlainText => Box::new(PlainTextExtractor),
    }
}

/// Detect the document kind and extract its text.
pub fn extract_text(data: &[u8], mime_type: &str, filename: &str) -> ExtractionResult<String> {
    let kind =
        DocumentKind::detect(mime_type, filename).ok_or(ExtractionError::UnsupportedFileType)?;
    tracing::debug!(%kind, bytes = data.len(), "extracting text");
    extractor_for(kind).extract(data)
}

/// Render an extraction error as the marker text string-channel callers
/// expect in place of document text.
pub fn marker_text(err: &ExtractionError) -> String {
    match err {
        ExtractionError::UnsupportedFileType => format!("Error: {err}"),
        other => format!("Extraction failed: {other}"),
    }
}

/// Plain-text documents, decoded as lossy UTF-8.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> ExtractionResult<String> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::PlainText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime() {
        assert_eq!(
            DocumentKind::detect("application/pdf", "report.bin"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("image/png", "scan"),
            Some(DocumentKind::Image)
        );
        assert_eq!(
            DocumentKind::detect("text/plain; charset=utf-8", "notes.txt"),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_detect_image_by_extension() {
        assert_eq!(
            DocumentKind::detect("application/octet-stream", "photo.JPG"),
            Some(DocumentKind::Image)
        );
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(DocumentKind::detect("application/zip", "archive.zip"), None);
    }

    #[test]
    fn test_allowed_file() {
        assert!(allowed_file("paper.pdf"));
        assert!(allowed_file("scan.JPEG"));
        assert!(allowed_file("notes.txt"));
        assert!(!allowed_file("archive.zip"));
        assert!(!allowed_file("pdf"));
        assert!(!allowed_file(""));
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = extract_text(b"Plain words here.", "text/plain", "a.txt").unwrap();
        assert_eq!(text, "Plain words here.");
    }

    #[test]
    fn test_unsupported_extraction() {
        let err = extract_text(b"PK", "application/zip", "a.zip").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFileType));
        assert_eq!(marker_text(&err), "Error: Unsupported file type.");
    }

    #[test]
    fn test_unreadable_image_reports_ocr_error() {
        let err = extract_text(&[0x89, b'P', b'N', b'G'], "image/png", "a.png").unwrap_err();
        assert!(matches!(err, ExtractionError::Ocr { .. }));
        assert!(marker_text(&err).starts_with("Extraction failed: "));
    }

    #[test]
    fn test_invalid_pdf_is_error() {
        let err = extract_text(b"not a pdf", "application/pdf", "a.pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }

    #[test]
    fn test_extractor_kinds() {
        for kind in [DocumentKind::Pdf, DocumentKind::Image, DocumentKind::PlainText] {
            assert_eq!(extractor_for(kind).kind(), kind);
        }
    }
}
