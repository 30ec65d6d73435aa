//! Sentence and word tokenization
//!
//! Sentences are split on whitespace that follows `.`, `!` or `?`. Words are
//! maximal runs of word characters (letters, digits, underscore) taken from
//! the lowercased text.

use std::sync::LazyLock;

use regex::Regex;

/// Terminal punctuation followed by the whitespace the split consumes.
static SENTENCE_BOUNDARY: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+"));

const TERMINALS: [char; 3] = ['.', '!', '?'];

/// Split text into sentences, in document order.
///
/// The input is trimmed first; every returned sentence is non-empty and keeps
/// its terminal punctuation. If the boundary matcher is unavailable the
/// simpler [`split_sentences_fallback`] is used instead.
pub fn tokenize_sentences(text: &str) -> Vec<&str> {
    match split_on_boundaries(text) {
        Ok(sentences) => sentences,
        Err(err) => {
            tracing::warn!(error = %err, "sentence splitter unavailable, falling back to punctuation split");
            split_sentences_fallback(text)
        }
    }
}

fn split_on_boundaries(text: &str) -> Result<Vec<&str>, &'static regex::Error> {
    let boundary = SENTENCE_BOUNDARY.as_ref()?;
    let text = text.trim();

    let mut sentences = Vec::new();
    let mut start = 0;
    for m in boundary.find_iter(text) {
        // Terminals are ASCII, so the sentence ends one byte into the match
        let sentence = &text[start..m.start() + 1];
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = m.end();
    }
    let tail = &text[start..];
    if !tail.is_empty() {
        sentences.push(tail);
    }

    Ok(sentences)
}

/// Split on every terminal mark, dropping the marks and empty pieces.
///
/// Uses plain string splitting only, so it cannot fail.
pub fn split_sentences_fallback(text: &str) -> Vec<&str> {
    text.split(TERMINALS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Returns `true` for characters that belong to a word token.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase the text and extract its word tokens.
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
