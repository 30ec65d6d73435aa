//! Frequency-scored sentence selection
//!
//! Each sentence scores the sum of the normalized frequencies of its words.
//! The top-N sentences are kept and returned in document order. Documents
//! without any signal vocabulary fall back to their leading sentences.

use std::cmp::Ordering;

use super::frequency::FrequencyTable;
use crate::types::{SelectionStrategy, Sentence};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { num_sentences: 6 }
    }
}

/// Result of sentence selection
#[derive(Debug, Clone)]
pub struct SelectionResult<'a> {
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence<'a>>,
    pub strategy: SelectionStrategy,
}

impl SelectionResult<'_> {
    /// Indices of the selected sentences, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.sentence.index).collect()
    }

    /// Selected sentence texts in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.sentence.text).collect()
    }
}

/// A selected sentence with its score
#[derive(Debug, Clone)]
pub struct SelectedSentence<'a> {
    pub sentence: Sentence<'a>,
    pub score: f64,
}

/// Top-N sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Score every sentence against `table`.
    pub fn score(&self, sentences: &[Sentence<'_>], table: &FrequencyTable) -> Vec<f64> {
        sentences
            .iter()
            .map(|s| table.score_sentence(s.text))
            .collect()
    }

    /// Select `min(num_sentences, sentences.len())` sentences.
    ///
    /// Ties on score go to the lower index. When the table is empty or no
    /// sentence scores above zero, the leading sentences are taken instead.
    pub fn select<'a>(
        &self,
        sentences: &[Sentence<'a>],
        table: &FrequencyTable,
    ) -> SelectionResult<'a> {
        let n = self.config.num_sentences.min(sentences.len());
        let scores = self.score(sentences, table);

        let has_signal = !table.is_empty() && scores.iter().any(|&s| s > 0.0);
        let (mut chosen, strategy) = if has_signal {
            (top_n(&scores, n), SelectionStrategy::Scored)
        } else {
            ((0..n).collect(), SelectionStrategy::Leading)
        };

        // Document order, never score order
        chosen.sort_unstable();

        let sentences = chosen
            .into_iter()
            .map(|i| SelectedSentence {
                sentence: sentences[i],
                score: scores[i],
            })
            .collect();

        SelectionResult {
            sentences,
            strategy,
        }
    }
}

/// Positions of the `n` highest scores, lowest position first among ties.
fn top_n(scores: &[f64], n: usize) -> Vec<usize> {
    let by_rank = |&a: &usize, &b: &usize| -> Ordering {
        scores[b].total_cmp(&scores[a]).then(a.cmp(&b))
    };

    if n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<usize> = (0..scores.len()).collect();
    if n < ranked.len() {
        ranked.select_nth_unstable_by(n - 1, by_rank);
        ranked.truncate(n);
    }
    ranked
}
