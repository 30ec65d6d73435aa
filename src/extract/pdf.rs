//! PDF text extraction using the `pdf-extract` crate.

use std::panic::{catch_unwind, UnwindSafe};

use super::{DocumentKind, ExtractionResult, TextExtractor};
use crate::errors::ExtractionError;

/// PDF extractor backed by `pdf-extract`.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    #[cfg(feature = "pdf")]
    fn extract(&self, data: &[u8]) -> ExtractionResult<String> {
        let text = guard_panics(|| pdf_extract::extract_text_from_mem(data))?;

        if text.trim().is_empty() {
            return Err(ExtractionError::Empty);
        }

        // pdf-extract separates pages with form feeds
        let pages: Vec<&str> = text.split('\x0C').collect();
        tracing::debug!(pages = pages.len(), "extracted PDF text");
        Ok(pages.join("\n"))
    }

    #[cfg(not(feature = "pdf"))]
    fn extract(&self, _data: &[u8]) -> ExtractionResult<String> {
        Err(ExtractionError::Pdf(
            "built without the `pdf` feature".into(),
        ))
    }
}

/// Run a parser call, turning both its error and any panic into
/// [`ExtractionError::Pdf`]. `pdf-extract` panics on some malformed fonts.
#[cfg_attr(not(feature = "pdf"), allow(dead_code))]
fn guard_panics<F, E>(parse: F) -> ExtractionResult<String>
where
    F: FnOnce() -> Result<String, E> + UnwindSafe,
    E: std::fmt::Display,
{
    match catch_unwind(parse) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => {
            tracing::warn!("PDF parser panicked");
            Err(ExtractionError::Pdf(
                "PDF parsing panicked (likely malformed font encoding)".into(),
            ))
        }
    }
}
