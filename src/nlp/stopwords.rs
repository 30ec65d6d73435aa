//! Stopword filtering
//!
//! English stopwords come from the NLTK list shipped by the `stop-words`
//! crate. A fixed fallback list guarantees a usable filter when that list is
//! unavailable, and custom lists can be supplied inline or from a file.

use std::path::Path;
use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use crate::errors::ConfigError;

/// Stopwords used when no richer list can be loaded.
pub const FALLBACK_STOPWORDS: [&str; 49] = [
    "a", "an", "the", "and", "or", "if", "in", "on", "at", "to", "from", "by", "for", "is",
    "are", "was", "were", "be", "been", "of", "that", "this", "these", "those", "it", "its", "as",
    "with", "not", "but", "we", "you", "they", "he", "she", "i", "me", "my", "your", "our",
    "their", "them", "so", "do", "does", "did", "have", "has", "had",
];

static BUILTIN: OnceLock<StopwordFilter> = OnceLock::new();

/// Where a summarizer takes its stopwords from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The `stop-words` English list, or the fallback if it is empty.
    #[default]
    Builtin,
    /// Only the fixed fallback list.
    Fallback,
    /// Newline-separated words read from a file.
    File(std::path::PathBuf),
    /// An inline list.
    List(Vec<String>),
}

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Load the builtin English list, falling back to [`FALLBACK_STOPWORDS`]
    /// when it yields nothing.
    pub fn english() -> Self {
        let stopwords: FxHashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        if stopwords.is_empty() {
            tracing::warn!("builtin English stopword list is empty, using fallback list");
            return Self::fallback();
        }
        Self { stopwords }
    }

    /// The fixed fallback list.
    pub fn fallback() -> Self {
        let stopwords = FALLBACK_STOPWORDS.iter().map(|s| s.to_string()).collect();
        Self { stopwords }
    }

    /// Process-wide builtin filter, built on first use and shared read-only.
    pub fn shared() -> &'static StopwordFilter {
        BUILTIN.get_or_init(Self::english)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words
            .iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stopwords }
    }

    /// Read one word per line; blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::StopwordFile {
                path: path.to_path_buf(),
                source,
            })?;

        let words: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        Ok(Self::from_list(&words))
    }

    /// Build a filter for `source`. Unreadable files degrade to the fallback
    /// list rather than failing.
    pub fn from_source(source: &StopwordSource) -> Self {
        match source {
            StopwordSource::Builtin => Self::shared().clone(),
            StopwordSource::Fallback => Self::fallback(),
            StopwordSource::List(words) => Self::from_list(words),
            StopwordSource::File(path) => Self::from_file(path).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "using fallback stopwords");
                Self::fallback()
            }),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if an already-lowercased token is a stopword
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
