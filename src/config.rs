//! Summarizer configuration.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "short_sentences": 3,
//!   "medium_sentences": 6,
//!   "long_sentences": 10,
//!   "stopwords": "builtin",
//!   "extra_stopwords": ["figure", "table"]
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::nlp::stopwords::{StopwordFilter, StopwordSource};
use crate::types::LengthTier;

/// Tunable settings for a [`crate::Summarizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Sentences kept for [`LengthTier::Short`].
    pub short_sentences: usize,
    /// Sentences kept for [`LengthTier::Medium`] and unrecognized tiers.
    pub medium_sentences: usize,
    /// Sentences kept for [`LengthTier::Long`].
    pub long_sentences: usize,
    /// Base stopword list.
    pub stopwords: StopwordSource,
    /// Words added on top of `stopwords`.
    pub extra_stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            short_sentences: 3,
            medium_sentences: 6,
            long_sentences: 10,
            stopwords: StopwordSource::Builtin,
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Target sentence count for `tier`.
    pub fn target_sentences(&self, tier: LengthTier) -> usize {
        match tier {
            LengthTier::Short => self.short_sentences,
            LengthTier::Medium => self.medium_sentences,
            LengthTier::Long => self.long_sentences,
        }
    }

    /// Set the sentence count for one tier.
    pub fn with_target(mut self, tier: LengthTier, sentences: usize) -> Self {
        match tier {
            LengthTier::Short => self.short_sentences = sentences,
            LengthTier::Medium => self.medium_sentences = sentences,
            LengthTier::Long => self.long_sentences = sentences,
        }
        self
    }

    /// Set the base stopword list.
    pub fn with_stopwords(mut self, source: StopwordSource) -> Self {
        self.stopwords = source;
        self
    }

    /// Add words to the stopword list.
    pub fn with_extra_stopwords<S: Into<String>>(
        mut self,
        words: impl IntoIterator<Item = S>,
    ) -> Self {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Check that every tier selects at least one sentence and that tiers
    /// do not shrink from short to long.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tiers = [
            ("short_sentences", self.short_sentences),
            ("medium_sentences", self.medium_sentences),
            ("long_sentences", self.long_sentences),
        ];
        for (field, count) in tiers {
            if count == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must select at least one sentence".into(),
                });
            }
        }
        if self.short_sentences > self.medium_sentences {
            return Err(ConfigError::Invalid {
                field: "short_sentences",
                reason: format!(
                    "{} exceeds medium_sentences ({})",
                    self.short_sentences, self.medium_sentences
                ),
            });
        }
        if self.medium_sentences > self.long_sentences {
            return Err(ConfigError::Invalid {
                field: "medium_sentences",
                reason: format!(
                    "{} exceeds long_sentences ({})",
                    self.medium_sentences, self.long_sentences
                ),
            });
        }
        Ok(())
    }

    /// Build the stopword filter this config describes.
    pub fn stopword_filter(&self) -> StopwordFilter {
        let mut filter = StopwordFilter::from_source(&self.stopwords);
        filter.add_stopwords(&self.extra_stopwords);
        filter
    }
}
