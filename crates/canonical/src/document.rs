//! Document loading.
//!
//! A [`SourceDocument`] is the raw text of one input file with every run of
//! whitespace collapsed to a single space. Collapsing happens before sentence
//! splitting, so line breaks inside a sentence never split it and report
//! fields never contain tabs or newlines.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;
use crate::hash::hash_text;

/// Whitespace-collapsed contents of one input document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path the document was read from, as given by the caller.
    pub path: PathBuf,
    /// Full text with whitespace collapsed.
    pub text: String,
    /// SHA-256 hex digest of `text`.
    pub sha256_hex: String,
}

impl SourceDocument {
    /// Build a document from in-memory text, e.g. for tests or piped input.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let text = collapse_whitespace(text);
        let sha256_hex = hash_text(&text);
        Self {
            path: path.into(),
            text,
            sha256_hex,
        }
    }
}

/// Read `path` as UTF-8 text.
///
/// Any I/O or decoding failure is reported as
/// [`CanonicalError::MalformedInput`] naming the offending path.
pub fn read_document(path: impl AsRef<Path>) -> Result<SourceDocument, CanonicalError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| CanonicalError::MalformedInput {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let text = String::from_utf8(bytes).map_err(|err| CanonicalError::MalformedInput {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8: {err}"),
    })?;

    let doc = SourceDocument::from_text(path, &text);
    tracing::debug!(
        path = %path.display(),
        bytes = doc.text.len(),
        sha256 = %doc.sha256_hex,
        "document loaded"
    );
    Ok(doc)
}

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello \r\n\t world  "), "hello world");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
