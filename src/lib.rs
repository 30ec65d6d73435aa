//! # doc-summarizer
//!
//! Extractive summarization of uploaded documents. Text is pulled out of a
//! PDF (or plain text), split into sentences, and the sentences whose words
//! are most frequent across the document are kept, in their original order,
//! as a single paragraph.
//!
//! ```rust
//! use doc_summarizer::{LengthTier, Summarizer};
//!
//! let text = "Cats sleep a lot. Cats also hunt mice. The weather was mild. Mice fear cats.";
//! let summary = Summarizer::new().summarize(text, LengthTier::Short).unwrap();
//! assert_eq!(summary.len(), 3);
//! ```

pub mod config;
pub mod errors;
pub mod extract;
pub mod nlp;
pub mod service;
pub mod summarizer;
pub mod types;

pub use config::SummarizerConfig;
pub use errors::{ConfigError, ExtractionError, SummarizeError};
pub use nlp::stopwords::{StopwordFilter, StopwordSource};
pub use summarizer::engine::Summarizer;
pub use types::{LengthTier, SelectionStrategy, Sentence, Summary};

/// Summarize `text` at the tier named by `length` using default settings.
///
/// Never fails: empty or failed-extraction input and sentence-less input
/// yield their fixed messages instead of a summary.
pub fn summarize(text: &str, length: &str) -> String {
    Summarizer::new().summarize_text(text, length)
}

/// Sentences kept for `tier` under the default settings.
pub fn target_sentence_count(tier: LengthTier) -> usize {
    SummarizerConfig::default().target_sentences(tier)
}
