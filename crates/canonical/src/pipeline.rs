use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::NormalizeConfig;
use crate::context::NormalizationContext;

/// Turns one sentence into its ordered sequence of cleaned word tokens.
///
/// Implementations must be deterministic: the same sentence always yields the
/// same tokens for the lifetime of the implementor.
pub trait TokenNormalizer: Send + Sync {
    fn normalize(&self, sentence: &str) -> Vec<String>;
}

impl TokenNormalizer for NormalizationContext {
    fn normalize(&self, sentence: &str) -> Vec<String> {
        normalize_sentence(sentence, self)
    }
}

/// Main entry point: character cleanup, then per-word filtering.
///
/// Degenerate sentences (only stopwords, digits or punctuation) produce an
/// empty vector rather than an error.
pub fn normalize_sentence(sentence: &str, ctx: &NormalizationContext) -> Vec<String> {
    let cfg = ctx.config();

    // Unicode normalization first, as it can affect character boundaries.
    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(sentence.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(sentence)
    };

    let cleaned = clean_chars(normalized.as_ref(), cfg);
    cleaned
        .split_whitespace()
        .filter_map(|word| finish_word(word, ctx))
        .collect()
}

fn clean_chars(text: &str, cfg: &NormalizeConfig) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        // Lowercasing can expand a single character into several.
        if cfg.lowercase {
            for lower in grapheme.to_lowercase().chars() {
                dispatch_char(lower, cfg, &mut cleaned);
            }
        } else {
            for ch in grapheme.chars() {
                dispatch_char(ch, cfg, &mut cleaned);
            }
        }
    }
    cleaned
}

fn dispatch_char(ch: char, cfg: &NormalizeConfig, cleaned: &mut String) {
    if cfg.strip_punctuation && ch != '\'' && ch.is_punctuation() {
        cleaned.push(' ');
    } else if cfg.strip_digits && ch.is_number_decimal_digit() {
        // dropped, not replaced: "1st" becomes "st"
    } else {
        cleaned.push(ch);
    }
}

fn finish_word(word: &str, ctx: &NormalizationContext) -> Option<String> {
    let cfg = ctx.config();
    let word = ctx.standardize(word);
    if ctx.is_stopword(word) || word.chars().count() < cfg.min_token_len {
        return None;
    }
    let word = ctx.stem(word.to_string());
    if ctx.frequency(&word) >= cfg.common_word_cutoff {
        return None;
    }
    Some(word)
}
