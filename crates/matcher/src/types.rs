use std::path::PathBuf;

use index::SentenceId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default minimum shared-fingerprint count a pair must exceed.
pub const DEFAULT_THRESHOLD: u64 = 5;

/// Key of the match count table: one sentence from each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SentencePair {
    /// Sentence id in document A.
    pub a: SentenceId,
    /// Sentence id in document B.
    pub b: SentenceId,
}

impl SentencePair {
    pub fn new(a: SentenceId, b: SentenceId) -> Self {
        Self { a, b }
    }
}

/// Output encoding of the report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Tab-separated, one record per line, no header.
    #[default]
    Tsv,
    /// One JSON object per line.
    Jsonl,
}

impl ReportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportFormat::Tsv => "tsv",
            ReportFormat::Jsonl => "jsonl",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" => Ok(ReportFormat::Tsv),
            "jsonl" => Ok(ReportFormat::Jsonl),
            other => Err(MatchError::InvalidConfig(format!(
                "unknown report format {other:?} (expected tsv or jsonl)"
            ))),
        }
    }
}

/// Configuration for matching and reporting.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in the top-level YAML config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration schema version for this match config.
    #[serde(default = "MatchConfig::default_version")]
    pub version: String,
    /// A pair is reported only when its count is strictly greater than this.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: u64,
    #[serde(default)]
    pub format: ReportFormat,
}

impl MatchConfig {
    pub(crate) fn default_version() -> String {
        "v1".to_string()
    }

    pub(crate) fn default_threshold() -> u64 {
        DEFAULT_THRESHOLD
    }

    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "config.version must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            threshold: Self::default_threshold(),
            format: ReportFormat::default(),
        }
    }
}

/// One reported sentence pair.
///
/// Serializes to exactly the five report fields; the sentence ids are kept
/// for ordering and debugging only.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchRecord {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    pub count: u64,
    #[serde(skip)]
    pub pair: SentencePair,
    pub sentence_a: String,
    pub sentence_b: String,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Writing the report failed.
    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),
    /// Encoding a JSONL record failed.
    #[error("report encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = MatchConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.threshold, DEFAULT_THRESHOLD);
        assert_eq!(cfg.format, ReportFormat::Tsv);
    }

    #[test]
    fn empty_version_rejected() {
        let cfg = MatchConfig {
            version: "  ".into(),
            ..MatchConfig::default()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        match err {
            MatchError::InvalidConfig(msg) => assert!(msg.contains("version")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: MatchConfig = serde_json::from_str(r#"{"format": "jsonl"}"#).unwrap();
        assert_eq!(cfg.threshold, 5);
        assert_eq!(cfg.format, ReportFormat::Jsonl);
    }

    #[test]
    fn report_format_parses_case_insensitively() {
        assert_eq!("TSV".parse::<ReportFormat>().unwrap(), ReportFormat::Tsv);
        assert_eq!(" jsonl ".parse::<ReportFormat>().unwrap(), ReportFormat::Jsonl);
        assert_eq!(
            ReportFormat::Jsonl.as_str().parse::<ReportFormat>().unwrap(),
            ReportFormat::Jsonl
        );
        assert!(matches!(
            "csv".parse::<ReportFormat>(),
            Err(MatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn sentence_pairs_order_by_a_then_b() {
        let mut pairs = vec![
            SentencePair::new(1, 0),
            SentencePair::new(0, 2),
            SentencePair::new(0, 1),
        ];
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                SentencePair::new(0, 1),
                SentencePair::new(0, 2),
                SentencePair::new(1, 0),
            ]
        );
    }
}
