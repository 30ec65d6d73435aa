//! Summarizer — orchestrates tokenization, scoring, selection and
//! reassembly for a single document.
//!
//! A [`Summarizer`] holds only read-only state (config and stopwords), so one
//! instance can serve any number of threads.

use std::borrow::Cow;

use rayon::prelude::*;

use super::frequency::FrequencyTable;
use super::reassemble::join_paragraph;
use super::selector::{SelectorConfig, SentenceSelector};
use crate::config::SummarizerConfig;
use crate::errors::{ConfigError, ExtractionError, Result, SummarizeError};
use crate::nlp::stopwords::{StopwordFilter, StopwordSource};
use crate::nlp::tokenizer::tokenize_sentences;
use crate::types::{LengthTier, Sentence, Summary};

/// Substrings the text extractor emits in place of text when it fails.
pub const FAILURE_MARKERS: [&str; 2] = ["Error:", "Extraction failed:"];

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_REASSEMBLE: &str = "reassemble";

/// Enter a debug span for one summarization stage until the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

/// Returns `true` if `text` carries an extraction-failure marker.
pub fn is_extraction_failure(text: &str) -> bool {
    FAILURE_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: Cow<'static, StopwordFilter>,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self {
            config: SummarizerConfig::default(),
            stopwords: Cow::Borrowed(StopwordFilter::shared()),
        }
    }
}

impl Summarizer {
    /// Create a summarizer with default config and the shared stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a validated config
    pub fn with_config(config: SummarizerConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let stopwords =
            if config.stopwords == StopwordSource::Builtin && config.extra_stopwords.is_empty() {
                Cow::Borrowed(StopwordFilter::shared())
            } else {
                Cow::Owned(config.stopword_filter())
            };
        Ok(Self { config, stopwords })
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Cow::Owned(stopwords);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Summarize raw extracted text.
    ///
    /// Empty text and text carrying one of the [`FAILURE_MARKERS`] are
    /// rejected before any tokenization.
    pub fn summarize(&self, text: &str, tier: LengthTier) -> Result<Summary> {
        if text.is_empty() || is_extraction_failure(text) {
            tracing::debug!("text empty or marked as failed extraction");
            return Err(SummarizeError::ExtractionFailed);
        }
        self.summarize_checked(text, tier)
    }

    /// Summarize the outcome of a text extractor without inspecting the text
    /// for failure markers.
    pub fn summarize_extracted(
        &self,
        extracted: &std::result::Result<String, ExtractionError>,
        tier: LengthTier,
    ) -> Result<Summary> {
        match extracted {
            Ok(text) if !text.is_empty() => self.summarize_checked(text, tier),
            Ok(_) => Err(SummarizeError::ExtractionFailed),
            Err(err) => {
                tracing::debug!(error = %err, "extraction failed, nothing to summarize");
                Err(SummarizeError::ExtractionFailed)
            }
        }
    }

    /// Summarize and render failures as their fixed messages.
    ///
    /// `length` is a tier name; unrecognized names mean medium.
    pub fn summarize_text(&self, text: &str, length: &str) -> String {
        match self.summarize(text, LengthTier::parse(length)) {
            Ok(summary) => summary.text,
            Err(err) => err.to_string(),
        }
    }

    /// Summarize independent documents in parallel, keeping input order.
    pub fn summarize_batch<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        tier: LengthTier,
    ) -> Vec<Result<Summary>> {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref(), tier))
            .collect()
    }

    fn summarize_checked(&self, text: &str, tier: LengthTier) -> Result<Summary> {
        let _span = tracing::info_span!("summarize", tier = %tier).entered();

        let sentences: Vec<Sentence<'_>> = {
            trace_stage!(STAGE_TOKENIZE);
            tokenize_sentences(text)
                .into_iter()
                .enumerate()
                .map(|(i, s)| Sentence::new(s, i))
                .collect()
        };
        if sentences.is_empty() {
            tracing::debug!("no sentences found");
            return Err(SummarizeError::TooShort);
        }

        let table = {
            trace_stage!(STAGE_FREQUENCY);
            FrequencyTable::build(text, &self.stopwords)
        };
        tracing::debug!(
            sentences = sentences.len(),
            vocabulary = table.len(),
            max_count = table.max_count(),
            "frequency table built"
        );

        let target = self.config.target_sentences(tier);
        let selection = {
            trace_stage!(STAGE_SELECT);
            SentenceSelector::with_config(SelectorConfig {
                num_sentences: target,
            })
            .select(&sentences, &table)
        };
        let sentence_indices = selection.indices();
        tracing::debug!(
            strategy = ?selection.strategy,
            selected = ?sentence_indices,
            "sentences selected"
        );

        let paragraph = {
            trace_stage!(STAGE_REASSEMBLE);
            join_paragraph(&selection.texts())
        };

        Ok(Summary {
            text: paragraph,
            sentence_indices,
            total_sentences: sentences.len(),
            tier,
            strategy: selection.strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{EXTRACTION_FAILED_MESSAGE, TOO_SHORT_MESSAGE};
    use crate::types::SelectionStrategy;

    fn fallback_summarizer() -> Summarizer {
        Summarizer::new().with_stopwords(StopwordFilter::fallback())
    }

    fn numbered_document(n: usize) -> String {
        (0..n)
            .map(|i| format!("Sentence number {i} mentions topic{i}."))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_empty_text_is_extraction_failure() {
        let summarizer = Summarizer::new();
        assert_eq!(
            summarizer.summarize("", LengthTier::Short),
            Err(SummarizeError::ExtractionFailed)
        );
        assert_eq!(summarizer.summarize_text("", "short"), EXTRACTION_FAILED_MESSAGE);
    }

    #[test]
    fn test_marker_short_circuits() {
        let summarizer = Summarizer::new();
        for tier in ["short", "medium", "long", "bogus"] {
            assert_eq!(
                summarizer.summarize_text("Error: Unsupported file type.", tier),
                EXTRACTION_FAILED_MESSAGE
            );
        }
        assert_eq!(
            summarizer.summarize_text("Extraction failed: bad xref", "long"),
            EXTRACTION_FAILED_MESSAGE
        );
    }

    #[test]
    fn test_word_error_alone_is_not_a_marker() {
        let summarizer = fallback_summarizer();
        let summary = summarizer
            .summarize("Error correction codes protect data.", LengthTier::Short)
            .unwrap();
        assert_eq!(summary.text, "Error correction codes protect data.");
    }

    #[test]
    fn test_whitespace_only_is_too_short() {
        let summarizer = Summarizer::new();
        assert_eq!(
            summarizer.summarize(" \n\t ", LengthTier::Medium),
            Err(SummarizeError::TooShort)
        );
        assert_eq!(summarizer.summarize_text("   ", "medium"), TOO_SHORT_MESSAGE);
    }

    #[test]
    fn test_single_sentence_without_terminal() {
        let summary = Summarizer::new()
            .summarize("Hello world", LengthTier::Medium)
            .unwrap();
        assert_eq!(summary.text, "Hello world");
        assert_eq!(summary.total_sentences, 1);
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_tier_targets() {
        let summarizer = fallback_summarizer();
        let doc = numbered_document(12);

        assert_eq!(summarizer.summarize(&doc, LengthTier::Short).unwrap().len(), 3);
        assert_eq!(summarizer.summarize(&doc, LengthTier::Medium).unwrap().len(), 6);
        assert_eq!(summarizer.summarize(&doc, LengthTier::Long).unwrap().len(), 10);
    }

    #[test]
    fn test_custom_config_targets() {
        let config = SummarizerConfig::default().with_target(LengthTier::Short, 1);
        let summarizer = Summarizer::with_config(config).unwrap();
        let summary = summarizer
            .summarize(&numbered_document(5), LengthTier::Short)
            .unwrap();
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SummarizerConfig::default().with_target(LengthTier::Long, 0);
        assert!(Summarizer::with_config(config).is_err());
    }

    #[test]
    fn test_stopword_only_document_uses_leading_sentences() {
        let summarizer = fallback_summarizer();
        let text = "The a an. Of and the. It is so. We do. They had.";
        let summary = summarizer.summarize(text, LengthTier::Short).unwrap();

        assert_eq!(summary.strategy, SelectionStrategy::Leading);
        assert_eq!(summary.text, "The a an. Of and the. It is so.");
    }

    #[test]
    fn test_summarize_extracted_ignores_markers_in_real_text() {
        let summarizer = fallback_summarizer();
        let extracted = Ok("Error: this heading is part of the manual.".to_string());
        let summary = summarizer
            .summarize_extracted(&extracted, LengthTier::Short)
            .unwrap();
        assert_eq!(summary.total_sentences, 1);

        let failed = Err(ExtractionError::UnsupportedFileType);
        assert_eq!(
            summarizer.summarize_extracted(&failed, LengthTier::Short),
            Err(SummarizeError::ExtractionFailed)
        );
    }

    #[test]
    fn test_batch_preserves_order() {
        let summarizer = fallback_summarizer();
        let docs = ["First doc.", "", "Third doc here."];
        let results = summarizer.summarize_batch(&docs, LengthTier::Short);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().text, "First doc.");
        assert_eq!(results[1], Err(SummarizeError::ExtractionFailed));
        assert_eq!(results[2].as_ref().unwrap().text, "Third doc here.");
    }

    #[test]
    fn test_glued_sentences_are_spaced() {
        let summarizer = fallback_summarizer();
        let summary = summarizer
            .summarize("Rust is fast.It is safe.", LengthTier::Short)
            .unwrap();
        // One sentence to the splitter, repaired by cleanup
        assert_eq!(summary.total_sentences, 1);
        assert_eq!(summary.text, "Rust is fast. It is safe.");
    }

    #[test]
    fn test_default_stopwords_keep_content_words() {
        let text = "The new system works. The new system works well. Our system works fast. \
                    Lunch arrived late. Coffee tasted bitter.";
        let summary = Summarizer::new().summarize(text, LengthTier::Short).unwrap();

        assert_eq!(summary.strategy, SelectionStrategy::Scored);
        assert_eq!(summary.sentence_indices, vec![0, 1, 2]);
    }
}
