//! Content digests for loaded documents.

use sha2::{Digest, Sha256};

/// Hash text with SHA-256 and return a hex digest.
///
/// ```rust
/// use canonical::hash_text;
///
/// let hash = hash_text("hello world");
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, hash_text("hello world"));
/// assert_ne!(hash, hash_text("hello world!"));
/// ```
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
