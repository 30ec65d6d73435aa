//! Upload-to-summary service facade.
//!
//! Mirrors the document upload endpoint without any HTTP machinery: the host
//! server hands over the uploaded file and writes back [`SummaryResponse`]
//! as JSON with its status code.

use serde::Serialize;

use crate::extract::{allowed_file, extract_text, marker_text};
use crate::summarizer::engine::Summarizer;
use crate::types::LengthTier;

/// Summary text reported when summarization fails.
pub const SUMMARY_UNAVAILABLE: &str = "Summary could not be generated.";

/// Message for uploads whose extension is not accepted.
pub const FILE_TYPE_NOT_ALLOWED: &str = "File type not allowed. Must be PDF, JPG, PNG, or TXT.";

/// An uploaded document.
#[derive(Debug, Clone, Copy)]
pub struct UploadRequest<'a> {
    pub filename: &'a str,
    pub mime_type: &'a str,
    pub bytes: &'a [u8],
    /// Requested tier name; absent means medium
    pub length: Option<&'a str>,
}

/// JSON body returned to the uploader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    pub message: String,
}

/// Status code plus body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryResponse {
    pub status: u16,
    #[serde(flatten)]
    pub body: ResponseBody,
}

impl SummaryResponse {
    fn bad_request(message: &str) -> Self {
        Self {
            status: 400,
            body: ResponseBody {
                summary: None,
                raw_text: None,
                message: message.to_string(),
            },
        }
    }

    fn failed(raw_text: String, message: String) -> Self {
        Self {
            status: 500,
            body: ResponseBody {
                summary: Some(SUMMARY_UNAVAILABLE.to_string()),
                raw_text: Some(raw_text),
                message,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Extract and summarize one uploaded document.
pub fn process_upload(summarizer: &Summarizer, request: UploadRequest<'_>) -> SummaryResponse {
    if request.filename.is_empty() {
        return SummaryResponse::bad_request("No selected file");
    }
    if !allowed_file(request.filename) {
        return SummaryResponse::bad_request(FILE_TYPE_NOT_ALLOWED);
    }

    let tier = LengthTier::parse(request.length.unwrap_or("medium"));
    let _span = tracing::info_span!("upload", filename = request.filename, %tier).entered();

    let extracted = extract_text(request.bytes, request.mime_type, request.filename);
    let raw_text = match &extracted {
        Ok(text) => text.clone(),
        Err(err) => {
            tracing::warn!(error = %err, "text extraction failed");
            let marker = marker_text(err);
            return SummaryResponse::failed(marker.clone(), marker);
        }
    };

    match summarizer.summarize_extracted(&extracted, tier) {
        Ok(summary) => SummaryResponse {
            status: 200,
            body: ResponseBody {
                summary: Some(summary.text),
                raw_text: Some(raw_text),
                message: format!("Successfully summarized {}.", request.filename),
            },
        },
        // Too-short text is a failure too, not a 200 carrying the message
        Err(err) => {
            tracing::warn!(error = %err, "summarization failed");
            SummaryResponse::failed(raw_text, err.to_string())
        }
    }
}
