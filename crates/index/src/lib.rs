//! # textreuse index
//!
//! Builds, per document, the inverted index that cross-document matching
//! runs on: every fingerprint maps to the ids of the sentences containing it.
//!
//! ## Key concepts
//!
//! A [`NormalizedDocument`] is the hand-off from the normalization layer: the
//! original sentence texts plus, for each sentence, its cleaned tokens.
//! [`DocumentIndex::build`] filters each sentence through the
//! [`SharedVocabulary`](fingerprint::SharedVocabulary), windows it, expands
//! the windows into fingerprints and records the sentence id under each one.
//!
//! A sentence contributes each of its fingerprints once, however many of its
//! windows produced it. Sentences with no fingerprints contribute nothing but
//! keep their id, so ids always line up with [`DocumentIndex::sentence`].
//!
//! The index is immutable once built. [`build_pair`] indexes both sides of a
//! comparison, optionally on two rayon workers, and only returns once both
//! are complete.
//!
//! ## Example
//!
//! ```
//! use fingerprint::{FingerprintConfig, SharedVocabulary};
//! use index::{DocumentIndex, IndexConfig, NormalizedDocument};
//!
//! let doc = NormalizedDocument::new("a.txt").with_sentence(
//!     "The cat sat on the mat.",
//!     vec!["cat".to_string(), "sat".to_string(), "mat".to_string()],
//! );
//! let vocab = SharedVocabulary::intersect(["cat", "sat", "mat"], ["cat", "sat", "mat"]);
//! let index = DocumentIndex::build(
//!     &doc,
//!     &vocab,
//!     &FingerprintConfig::new(3, 3, 2),
//!     &IndexConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(index.fingerprint_count(), 3);
//! assert_eq!(index.sentence(0), Some("The cat sat on the mat."));
//! ```

mod document;

pub use document::{build_pair, DocumentIndex, IndexStats, NormalizedDocument, SentenceId};

use fingerprint::FingerprintError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bump whenever the index layout or build semantics change.
pub const INDEX_SCHEMA_VERSION: u16 = 1;

/// Config for building document indexes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexConfig {
    pub version: u16,
    /// Index the two documents on separate rayon workers and fingerprint
    /// sentences in parallel. The result is identical to a sequential build.
    pub use_parallel: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            version: INDEX_SCHEMA_VERSION,
            use_parallel: false,
        }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.version == 0 {
            return Err(IndexError::InvalidConfig(
                "version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Custom error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("invalid index config: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),
}
