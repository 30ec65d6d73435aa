//! Core data types shared across the summarizer.

use serde::{Deserialize, Serialize};

// ============================================================================
// LengthTier
// ============================================================================

/// Coarse summary length selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthTier {
    Short,
    #[default]
    Medium,
    Long,
}

impl LengthTier {
    /// Parse a tier name. Anything unrecognized is treated as `Medium`.
    pub fn parse(value: &str) -> Self {
        match value {
            "short" => LengthTier::Short,
            "long" => LengthTier::Long,
            _ => LengthTier::Medium,
        }
    }

    /// Returns the user-facing name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl std::str::FromStr for LengthTier {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LengthTier::parse(value))
    }
}

impl std::fmt::Display for LengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence borrowed from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// The sentence text, as it appears in the document
    pub text: &'a str,
    /// 0-based position in the document's sentence sequence
    pub index: usize,
}

impl<'a> Sentence<'a> {
    pub fn new(text: &'a str, index: usize) -> Self {
        Self { text, index }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// How the summary sentences were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Highest-scoring sentences by normalized term frequency.
    Scored,
    /// Leading sentences, used when the document has no signal vocabulary.
    Leading,
}

/// A successful extractive summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// The cleaned, single-line summary paragraph
    pub text: String,
    /// Indices of the selected sentences, ascending
    pub sentence_indices: Vec<usize>,
    /// Number of sentences the document was split into
    pub total_sentences: usize,
    /// Tier the summary was produced for
    pub tier: LengthTier,
    pub strategy: SelectionStrategy,
}

impl Summary {
    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.sentence_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentence_indices.is_empty()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
