//! # textreuse matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the index layer (`index`). Given the inverted
//! indexes of two documents it scores every sentence pair by the number of
//! fingerprints the two sentences share, keeps the pairs above a threshold
//! and writes them out as a report.
//!
//! ## Core types
//!
//! - [`MatchCountTable`]: shared-fingerprint count per [`SentencePair`].
//! - [`MatchConfig`]: significance threshold (default 5) and report format.
//! - [`MatchRecord`]: one reported pair with both paths and sentence texts.
//! - [`Matcher`]: counts, filters and orders in one call.
//!
//! Counting is exhaustive: a fingerprint occurring in `m` sentences of A and
//! `n` sentences of B adds one to each of the `m * n` pairs.
//!
//! ## Example usage
//!
//! ```
//! use fingerprint::{FingerprintConfig, SharedVocabulary};
//! use index::{build_pair, IndexConfig, NormalizedDocument};
//! use matcher::{write_report, MatchConfig, Matcher, ReportFormat};
//!
//! let words = |s: &str| s.split_whitespace().map(str::to_string).collect::<Vec<_>>();
//! let a = NormalizedDocument::new("a.txt").with_sentence("The cat sat on the mat.", words("cat sat mat"));
//! let b = NormalizedDocument::new("b.txt").with_sentence("A cat sat near a mat.", words("cat sat mat"));
//! let vocab = SharedVocabulary::intersect(a.tokens(), b.tokens());
//! let (ia, ib) = build_pair(&a, &b, &vocab, &FingerprintConfig::new(3, 3, 2), &IndexConfig::default()).unwrap();
//!
//! let matcher = Matcher::new(MatchConfig::default().with_threshold(1)).unwrap();
//! let outcome = matcher.match_documents(&ia, &ib);
//! assert_eq!(outcome.records.len(), 1);
//! assert_eq!(outcome.records[0].count, 3);
//!
//! let mut out = Vec::new();
//! write_report(&outcome.records, ReportFormat::Tsv, &mut out).unwrap();
//! ```

pub mod engine;
pub mod report;
pub mod types;

pub use crate::engine::{
    count_sentence_matches, significant_matches, MatchCountTable, MatchOutcome, Matcher,
};
pub use crate::report::write_report;
pub use crate::types::{
    MatchConfig, MatchError, MatchRecord, ReportFormat, SentencePair, DEFAULT_THRESHOLD,
};
