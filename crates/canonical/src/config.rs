//! Configuration types for the token normalization pipeline.
//!
//! [`NormalizeConfig`] controls how a sentence is turned into the ordered
//! sequence of cleaned word tokens consumed by fingerprinting.
//!
//! # Versioning
//!
//! Any change to normalization behavior that can alter the emitted tokens must
//! be accompanied by a version bump, so reports produced under different
//! versions are never silently compared.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(config.strip_punctuation);
//! assert_eq!(config.min_token_len, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Frequency assigned to words absent from the frequency table.
pub const UNKNOWN_WORD_FREQUENCY: f64 = 0.000_001;

/// Configuration for sentence normalization.
///
/// Cheap to clone and serde-friendly so it can be embedded in the YAML run
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Semantic version of the normalization behavior. Must be >= 1.
    pub version: u32,

    /// Apply Unicode NFKC normalization before any other transform.
    ///
    /// Composed and decomposed forms of the same character ("é" vs
    /// "e" + U+0301) must yield the same token, otherwise shared vocabulary
    /// between two documents is silently lost.
    pub normalize_unicode: bool,

    /// Apply locale-free Unicode lowercasing.
    pub lowercase: bool,

    /// Replace punctuation with whitespace. The apostrophe is kept so that
    /// contractions and elisions survive as a single word.
    pub strip_punctuation: bool,

    /// Remove decimal digits from the text.
    pub strip_digits: bool,

    /// Words shorter than this many characters are dropped together with
    /// stopwords.
    pub min_token_len: usize,

    /// Reduce words to their English stem.
    pub stem: bool,

    /// Words whose relative frequency is at or above this cutoff are dropped.
    ///
    /// Only has an effect when the normalization context carries a frequency
    /// table. Must be within `(0.0, 1.0]`.
    pub common_word_cutoff: f64,
}

impl NormalizeConfig {
    /// Create a new configuration with the default pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFKC normalization.
    pub fn with_unicode_normalization(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable or disable stemming.
    pub fn with_stemming(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    /// Set the minimum token length in characters.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Set the relative frequency at which a word counts as common.
    pub fn with_common_word_cutoff(mut self, cutoff: f64) -> Self {
        self.common_word_cutoff = cutoff;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if !(self.common_word_cutoff > 0.0 && self.common_word_cutoff <= 1.0) {
            return Err(CanonicalError::InvalidConfig(format!(
                "common_word_cutoff must be within (0.0, 1.0], got {}",
                self.common_word_cutoff
            )));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            strip_punctuation: true,
            strip_digits: true,
            min_token_len: 2,
            stem: true,
            common_word_cutoff: 0.9,
        }
    }
}
