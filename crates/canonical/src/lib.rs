//! Text normalization layer for textreuse.
//!
//! Everything upstream of fingerprinting lives here: reading documents,
//! splitting them into sentences and turning each sentence into the ordered
//! sequence of cleaned word tokens the fingerprint engine consumes.
//!
//! ## What we do
//!
//! - Read UTF-8 documents and collapse whitespace ([`read_document`])
//! - Split text on Unicode sentence boundaries ([`UnicodeSentenceSplitter`])
//! - Normalize a sentence: NFKC, lowercase, punctuation and digit stripping,
//!   orthographic standardization, stopword and short-word removal, stemming
//!   and common-word filtering ([`NormalizationContext`])
//!
//! The two collaborators fingerprinting depends on are traits
//! ([`TokenNormalizer`], [`SentenceSplitter`]) so either can be swapped.
//!
//! ## Pure function guarantee
//!
//! Once a [`NormalizationContext`] is built, normalization does no I/O and
//! reads no global state. Same sentence + same context = same tokens.
//!
//! ```rust
//! use canonical::{NormalizationContext, NormalizeConfig, TokenNormalizer};
//!
//! let ctx = NormalizationContext::with_defaults(NormalizeConfig::default()).unwrap();
//! assert_eq!(ctx.normalize("The cat sat on the mat."), vec!["cat", "sat", "mat"]);
//! ```

mod config;
mod context;
mod document;
mod error;
mod hash;
mod pipeline;
mod sentence;

pub use crate::config::{NormalizeConfig, UNKNOWN_WORD_FREQUENCY};
pub use crate::context::{
    NormalizationContext, NormalizationContextBuilder, FREQUENCIES_FILE,
    ORTHOGRAPHIC_VARIANTS_FILE, STOPWORDS_FILE,
};
pub use crate::document::{collapse_whitespace, read_document, SourceDocument};
pub use crate::error::CanonicalError;
pub use crate::hash::hash_text;
pub use crate::pipeline::{normalize_sentence, TokenNormalizer};
pub use crate::sentence::{split_sentences, SentenceSplitter, UnicodeSentenceSplitter};
