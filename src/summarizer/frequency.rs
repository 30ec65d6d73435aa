//! Normalized term-frequency table
//!
//! Counts every non-stopword token in the document and divides by the count
//! of the most frequent one, so the top term scores exactly 1.0.

use rustc_hash::FxHashMap;

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{is_word_char, tokenize_words};

/// Document-wide term frequencies in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    frequencies: FxHashMap<String, f64>,
    /// Count of the most frequent term (clamped to at least 1)
    max_count: usize,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self {
            frequencies: FxHashMap::default(),
            max_count: 1,
        }
    }
}

impl FrequencyTable {
    /// Build the table for `text`, skipping stopwords.
    pub fn build(text: &str, stopwords: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for word in tokenize_words(text) {
            if stopwords.is_stopword(&word) || !word.chars().any(is_word_char) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }

        let max_count = counts.values().copied().max().unwrap_or(0).max(1);
        let frequencies = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count as f64))
            .collect();

        Self {
            frequencies,
            max_count,
        }
    }

    /// Normalized frequency of `word`, or 0 if it is not in the table.
    #[inline]
    pub fn get(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequencies.contains_key(word)
    }

    /// The normalization denominator.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Largest normalized value, 0 for an empty table.
    pub fn max_frequency(&self) -> f64 {
        self.frequencies.values().copied().fold(0.0, f64::max)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sum of the frequencies of every token in `sentence`.
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        tokenize_words(sentence).iter().map(|w| self.get(w)).sum()
    }
}
