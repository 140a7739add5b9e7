//! # textreuse fingerprinting
//!
//! Turns normalized sentences into sets of order-insensitive word-combination
//! fingerprints, the unit of comparison for text-reuse detection.
//!
//! ## Contract
//!
//! - The layer **only** consumes tokens already cleaned by the canonical
//!   crate. It never normalizes, splits or reads files.
//! - Everything here is a pure function of `(token ids, config)`.
//!
//! Invariant: for the same token ids and the same [`FingerprintConfig`], the
//! fingerprint set of a sentence is identical across runs.
//!
//! ## Core pipeline
//!
//! 1.  **Shared vocabulary**: only words occurring in *both* documents can
//!     ever match, so each sentence is first reduced to ids from the
//!     [`SharedVocabulary`].
//! 2.  **Windowing**: the id sequence is cut into fixed-size, possibly
//!     overlapping [`Window`]s, padded at the tail.
//! 3.  **Combination**: every `k`-subset of the real ids of a window becomes a
//!     canonical [`Fingerprint`] (ids ascending), so reordered or interleaved
//!     phrasings still collide.
//!
//! ## Example
//!
//! ```
//! use fingerprint::{sentence_fingerprints, FingerprintConfig, SharedVocabulary};
//!
//! let a = ["cat", "sat", "mat"];
//! let b = ["cat", "sat", "near", "mat"];
//! let vocab = SharedVocabulary::intersect(a, b);
//! let config = FingerprintConfig::new(3, 3, 2);
//!
//! let fps = sentence_fingerprints(&vocab.encode(&b), &config).unwrap();
//! assert_eq!(fps.len(), 3);
//! ```
pub mod config;
pub mod fingerprint;
pub mod vocab;
pub mod window;

pub use crate::config::{FingerprintConfig, FingerprintError};
pub use crate::fingerprint::{fingerprints, Fingerprint, FingerprintSet};
pub use crate::vocab::{SharedVocabulary, TokenId};
pub use crate::window::{sliding_windows, SlidingWindows, Window};

/// Union of the fingerprints of every window of one sentence.
///
/// `config` is validated first; a sentence with no shared ids yields an empty
/// set.
pub fn sentence_fingerprints(
    ids: &[TokenId],
    config: &FingerprintConfig,
) -> Result<FingerprintSet, FingerprintError> {
    config.validate()?;
    let mut out = FingerprintSet::new();
    for window in sliding_windows(ids, config.window_size, config.step)? {
        fingerprint::extend_fingerprints(&window, config.arity, &mut out)?;
    }
    Ok(out)
}
