//! Summarization components
//!
//! Provides extractive summarization by normalized term frequency: sentences
//! are scored by the frequencies of their words, the best are kept, and the
//! survivors are rejoined in document order.

pub mod engine;
pub mod frequency;
pub mod reassemble;
pub mod selector;
