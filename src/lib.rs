//! Workspace umbrella crate for textreuse.
//!
//! This crate stitches the stages together so callers can compare two
//! documents with a single API entry point:
//!
//! 1. load both documents ([`canonical::read_document`]),
//! 2. split them into sentences and normalize each sentence,
//! 3. intersect their vocabularies ([`SharedVocabulary`]),
//! 4. index each document by fingerprint ([`index::build_pair`]),
//! 5. count shared fingerprints per sentence pair and keep the significant
//!    pairs ([`Matcher`]).
//!
//! Every run is self-contained: nothing is cached or persisted between two
//! comparisons.

pub mod config;

pub use canonical::{
    read_document, CanonicalError, NormalizationContext, NormalizeConfig, SentenceSplitter,
    SourceDocument, TokenNormalizer, UnicodeSentenceSplitter,
};
pub use config::{ConfigLoadError, TextReuseConfig};
pub use fingerprint::{FingerprintConfig, FingerprintError, SharedVocabulary};
pub use index::{IndexConfig, IndexError, IndexStats, NormalizedDocument};
pub use matcher::{write_report, MatchConfig, MatchError, MatchRecord, Matcher, ReportFormat};

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

/// Errors that can occur while comparing two documents.
#[derive(Debug)]
pub enum PipelineError {
    /// A run parameter is missing or out of range. Raised before any
    /// document is indexed.
    InvalidParameter { name: String, reason: String },
    /// A document could not be read or decoded as text.
    MalformedInput { path: PathBuf, reason: String },
    Canonical(CanonicalError),
    Index(IndexError),
    Match(MatchError),
    Config(ConfigLoadError),
}

impl PipelineError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PipelineError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter {name}: {reason}")
            }
            PipelineError::MalformedInput { path, reason } => {
                write!(f, "malformed input {}: {reason}", path.display())
            }
            PipelineError::Canonical(err) => write!(f, "normalization failure: {err}"),
            PipelineError::Index(err) => write!(f, "indexing failure: {err}"),
            PipelineError::Match(err) => write!(f, "matching failure: {err}"),
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Canonical(err) => Some(err),
            PipelineError::Index(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Config(err) => Some(err),
            PipelineError::InvalidParameter { .. } | PipelineError::MalformedInput { .. } => None,
        }
    }
}

impl From<CanonicalError> for PipelineError {
    fn from(value: CanonicalError) -> Self {
        match value {
            CanonicalError::MalformedInput { path, reason } => {
                PipelineError::MalformedInput { path, reason }
            }
            other => PipelineError::Canonical(other),
        }
    }
}

impl From<FingerprintError> for PipelineError {
    fn from(value: FingerprintError) -> Self {
        match value {
            FingerprintError::InvalidParameter { name, reason } => {
                PipelineError::invalid_parameter(name, reason)
            }
        }
    }
}

impl From<IndexError> for PipelineError {
    fn from(value: IndexError) -> Self {
        match value {
            IndexError::Fingerprint(err) => err.into(),
            other => PipelineError::Index(other),
        }
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

/// Validated parameters for one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub fingerprint: FingerprintConfig,
    pub index: IndexConfig,
    pub matcher: MatchConfig,
}

impl PipelineConfig {
    /// Windowing parameters are mandatory; index and matcher use defaults.
    pub fn new(fingerprint: FingerprintConfig) -> Self {
        Self {
            fingerprint,
            index: IndexConfig::default(),
            matcher: MatchConfig::default(),
        }
    }

    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_matcher(mut self, matcher: MatchConfig) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.matcher.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.index.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        self.fingerprint.validate()?;
        self.index.validate()?;
        self.matcher.validate()?;
        Ok(())
    }
}

/// Counters describing one comparison, logged at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub sha256_a: String,
    pub sha256_b: String,
    pub shared_vocabulary: usize,
    pub index_a: IndexStats,
    pub index_b: IndexStats,
    pub shared_fingerprints: usize,
    pub candidate_pairs: usize,
    pub reported_pairs: usize,
    pub threshold: u64,
}

/// Significant sentence pairs plus the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub summary: RunSummary,
    pub records: Vec<MatchRecord>,
}

impl ComparisonReport {
    /// Write the records in `format`; the summary is not part of the report.
    pub fn write<W: std::io::Write>(
        &self,
        format: ReportFormat,
        out: W,
    ) -> Result<(), PipelineError> {
        write_report(&self.records, format, out)?;
        Ok(())
    }
}

/// Split and normalize one document.
///
/// Sentences that normalize to nothing are kept, so sentence ids always
/// match the splitter's output.
pub fn normalize_document(
    source: &SourceDocument,
    splitter: &dyn SentenceSplitter,
    normalizer: &dyn TokenNormalizer,
) -> NormalizedDocument {
    let mut doc = NormalizedDocument::new(&source.path);
    for sentence in splitter.split(&source.text) {
        let tokens = normalizer.normalize(&sentence);
        doc.push(sentence, tokens);
    }
    doc
}

/// Compare two in-memory documents.
pub fn compare_sources(
    source_a: &SourceDocument,
    source_b: &SourceDocument,
    splitter: &dyn SentenceSplitter,
    normalizer: &dyn TokenNormalizer,
    cfg: &PipelineConfig,
) -> Result<ComparisonReport, PipelineError> {
    cfg.validate()?;
    let matcher = Matcher::new(cfg.matcher.clone())?;
    let start = Instant::now();

    let doc_a = normalize_document(source_a, splitter, normalizer);
    let doc_b = normalize_document(source_b, splitter, normalizer);
    tracing::debug!(
        sentences_a = doc_a.len(),
        sentences_b = doc_b.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "documents normalized"
    );

    let vocab = SharedVocabulary::intersect(doc_a.tokens(), doc_b.tokens());
    if vocab.is_empty() {
        tracing::info!("documents share no vocabulary; report will be empty");
    }

    let (index_a, index_b) =
        index::build_pair(&doc_a, &doc_b, &vocab, &cfg.fingerprint, &cfg.index)?;
    let outcome = matcher.match_documents(&index_a, &index_b);

    let summary = RunSummary {
        path_a: source_a.path.clone(),
        path_b: source_b.path.clone(),
        sha256_a: source_a.sha256_hex.clone(),
        sha256_b: source_b.sha256_hex.clone(),
        shared_vocabulary: vocab.len(),
        index_a: index_a.stats(),
        index_b: index_b.stats(),
        shared_fingerprints: outcome.shared_fingerprints,
        candidate_pairs: outcome.candidate_pairs,
        reported_pairs: outcome.records.len(),
        threshold: cfg.matcher.threshold,
    };
    tracing::info!(
        path_a = %summary.path_a.display(),
        path_b = %summary.path_b.display(),
        sentences_a = summary.index_a.sentences,
        sentences_b = summary.index_b.sentences,
        shared_vocabulary = summary.shared_vocabulary,
        fingerprints_a = summary.index_a.fingerprints,
        fingerprints_b = summary.index_b.fingerprints,
        candidate_pairs = summary.candidate_pairs,
        reported_pairs = summary.reported_pairs,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "comparison finished"
    );

    Ok(ComparisonReport {
        summary,
        records: outcome.records,
    })
}

/// Read and compare two documents from disk with the default splitter.
///
/// Parameters are validated before either file is opened.
pub fn compare_documents(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
    ctx: &NormalizationContext,
    cfg: &PipelineConfig,
) -> Result<ComparisonReport, PipelineError> {
    cfg.validate()?;
    let source_a = read_document(path_a)?;
    let source_b = read_document(path_b)?;
    compare_sources(&source_a, &source_b, &UnicodeSentenceSplitter, ctx, cfg)
}
