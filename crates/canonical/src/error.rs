use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading documents, resource tables or validating the
/// normalization config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed input document {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },
    #[error("failed to load resource table {}: {reason}", path.display())]
    Resource { path: PathBuf, reason: String },
}
