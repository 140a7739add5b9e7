//! Sentence boundary detection.

use unicode_segmentation::UnicodeSegmentation;

use crate::document::collapse_whitespace;

/// Splits document text into an ordered sequence of sentence texts.
///
/// The returned sentences are the text reported for matches, so
/// implementations should keep them readable (no normalization beyond
/// whitespace).
pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

/// Splits on Unicode (UAX #29) sentence boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSplitter;

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        split_sentences(text)
    }
}

/// Sentences are whitespace-collapsed; blank ones are dropped so sentence ids
/// stay dense.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(collapse_whitespace)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
