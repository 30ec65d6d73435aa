//! Image OCR through the `tesseract` command-line tool.
//!
//! The image bytes are written to a temporary file and handed to
//! `tesseract <file> stdout`. A missing binary or a failed run is reported as
//! [`ExtractionError::Ocr`].

use super::{DocumentKind, ExtractionResult, TextExtractor};
use crate::errors::ExtractionError;

/// Tesseract language code used when none is given.
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

/// Scanned-image extractor backed by `tesseract`.
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    language: String,
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self {
            language: DEFAULT_OCR_LANGUAGE.to_string(),
        }
    }
}

impl ImageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize text in `language` (a tesseract code such as `deu`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Whether the `tesseract` binary can be run.
pub fn is_ocr_available() -> bool {
    let found = std::process::Command::new("tesseract")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success());
    if !found {
        tracing::debug!("tesseract not found - install tesseract-ocr for OCR support");
    }
    found
}

impl TextExtractor for ImageExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Image
    }

    #[cfg(feature = "ocr")]
    fn extract(&self, data: &[u8]) -> ExtractionResult<String> {
        use std::io::Write;

        if !is_ocr_available() {
            return Err(ocr_error("tesseract is not installed"));
        }

        let mut image = tempfile::NamedTempFile::new()
            .map_err(|e| ocr_error(format!("cannot create temp file: {e}")))?;
        image
            .write_all(data)
            .map_err(|e| ocr_error(format!("cannot write temp file: {e}")))?;
        image
            .flush()
            .map_err(|e| ocr_error(format!("cannot write temp file: {e}")))?;

        let output = std::process::Command::new("tesseract")
            .arg(image.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| ocr_error(format!("failed to run tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::warn!(status = ?output.status, "tesseract failed");
            return Err(ocr_error(format!("tesseract failed: {}", stderr.trim())));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(ExtractionError::Empty);
        }
        tracing::debug!(chars = text.len(), language = %self.language, "OCR complete");
        Ok(text)
    }

    #[cfg(not(feature = "ocr"))]
    fn extract(&self, _data: &[u8]) -> ExtractionResult<String> {
        Err(ocr_error("built without the `ocr` feature"))
    }
}

fn ocr_error(reason: impl Into<String>) -> ExtractionError {
    ExtractionError::Ocr {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        assert_eq!(ImageExtractor::new().language(), "eng");
        assert_eq!(ImageExtractor::new().with_language("deu").language(), "deu");
    }

    #[test]
    fn test_truncated_image_is_ocr_error() {
        // Fails whether or not tesseract is installed: no engine, or an
        // unreadable image
        let err = ImageExtractor::new()
            .extract(&[0x89, b'P', b'N', b'G'])
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Ocr { .. }));
    }

    #[cfg(feature = "ocr")]
    #[test]
    fn test_missing_engine_is_named() {
        if is_ocr_available() {
            return;
        }
        let err = ImageExtractor::new().extract(b"not an image").unwrap_err();
        assert_eq!(err.to_string(), "OCR failed: tesseract is not installed");
    }

    #[cfg(not(feature = "ocr"))]
    #[test]
    fn test_disabled_feature_is_named() {
        let err = ImageExtractor::new().extract(b"").unwrap_err();
        assert!(err.to_string().contains("`ocr` feature"));
    }
}
