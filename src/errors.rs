//! Error types for summarization, extraction, and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Message returned when the input carries no usable text.
pub const EXTRACTION_FAILED_MESSAGE: &str =
    "Cannot summarize: Text extraction failed or document is empty.";

/// Message returned when the text splits into zero sentences.
pub const TOO_SHORT_MESSAGE: &str = "Document is too short or lacks substantive content.";

/// Result type alias for summarization.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Reasons a summary could not be produced.
///
/// `Display` renders the fixed user-facing messages, so string-channel
/// callers see exactly the text they always have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// The text is empty or carries an extraction-failure marker.
    #[error("Cannot summarize: Text extraction failed or document is empty.")]
    ExtractionFailed,

    /// The text produced no sentences.
    #[error("Document is too short or lacks substantive content.")]
    TooShort,
}

/// Errors from turning an uploaded document into text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type.")]
    UnsupportedFileType,

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("OCR failed: {reason}")]
    Ocr { reason: String },

    #[error("no text extracted from document")]
    Empty,
}

/// Errors from loading or validating a [`crate::config::SummarizerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("cannot read stopword file {path}: {source}")]
    StopwordFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
