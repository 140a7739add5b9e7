//! YAML configuration file support for textreuse.
//!
//! All stage configurations (canonical, fingerprint, index, matcher) live in
//! a single YAML file loaded at startup. Command-line flags override values
//! from the file.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "moby-dick vs. sources"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: true
//!   strip_punctuation: true
//!   strip_digits: true
//!   min_token_len: 2
//!   stem: true
//!   common_word_cutoff: 0.9
//!   resources: "resources"
//!
//! fingerprint:
//!   window_size: 10
//!   step: 5
//!   arity: 3
//!
//! index:
//!   use_parallel: false
//!
//! matcher:
//!   version: 1
//!   threshold: 5
//!   format: "tsv"
//! ```
//!
//! The three `fingerprint` parameters have no defaults. They may be left out
//! of the file only if they are supplied on the command line.

use std::fs;
use std::path::{Path, PathBuf};

use canonical::NormalizeConfig;
use fingerprint::FingerprintConfig;
use index::IndexConfig;
use matcher::{MatchConfig, ReportFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PipelineConfig, PipelineError};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}

/// Top-level YAML configuration structure for a textreuse run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TextReuseConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub fingerprint: FingerprintYamlConfig,

    #[serde(default)]
    pub index: IndexYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl TextReuseConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TextReuseConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Fingerprint parameters are range-checked later, by
    /// [`pipeline_config`](Self::pipeline_config), once command-line
    /// overrides have been applied.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.trim() {
            "" => Err(ConfigLoadError::MissingField("version".to_string())),
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        self.index.validate()?;
        self.matcher.validate()?;

        Ok(())
    }

    /// Resolve the validated parameters for one comparison.
    ///
    /// A missing or out-of-range window size, step or arity fails with
    /// [`PipelineError::InvalidParameter`].
    pub fn pipeline_config(&self) -> Result<PipelineConfig, PipelineError> {
        let cfg = PipelineConfig::new(self.fingerprint.to_fingerprint_config()?)
            .with_index(self.index.to_index_config())
            .with_matcher(self.matcher.to_match_config()?);
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for TextReuseConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            fingerprint: FingerprintYamlConfig::default(),
            index: IndexYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// Normalization YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub normalize_unicode: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "true_value")]
    pub strip_punctuation: bool,

    #[serde(default = "true_value")]
    pub strip_digits: bool,

    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    #[serde(default = "true_value")]
    pub stem: bool,

    #[serde(default = "default_common_word_cutoff")]
    pub common_word_cutoff: f64,

    /// Directory holding `orthographic_variants.txt`, `stopwords.txt` and
    /// `frequencies.txt`. Each file is optional.
    #[serde(default)]
    pub resources: Option<PathBuf>,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        self.to_normalize_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("canonical: {err}")))
    }

    pub fn to_normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            version: self.version,
            normalize_unicode: self.normalize_unicode,
            lowercase: self.lowercase,
            strip_punctuation: self.strip_punctuation,
            strip_digits: self.strip_digits,
            min_token_len: self.min_token_len,
            stem: self.stem,
            common_word_cutoff: self.common_word_cutoff,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            strip_punctuation: true,
            strip_digits: true,
            min_token_len: default_min_token_len(),
            stem: true,
            common_word_cutoff: default_common_word_cutoff(),
            resources: None,
        }
    }
}

/// Windowing YAML configuration. No field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintYamlConfig {
    #[serde(default)]
    pub window_size: Option<usize>,

    #[serde(default)]
    pub step: Option<usize>,

    #[serde(default)]
    pub arity: Option<usize>,
}

impl FingerprintYamlConfig {
    pub fn to_fingerprint_config(&self) -> Result<FingerprintConfig, PipelineError> {
        let required = |value: Option<usize>, name: &str| {
            value.ok_or_else(|| {
                let flag = name.replace('_', "-");
                PipelineError::invalid_parameter(
                    name,
                    format!("missing (set fingerprint.{name} or pass --{flag})"),
                )
            })
        };
        Ok(FingerprintConfig::new(
            required(self.window_size, "window_size")?,
            required(self.step, "step")?,
            required(self.arity, "arity")?,
        ))
    }
}

/// Index YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexYamlConfig {
    #[serde(default)]
    pub use_parallel: bool,
}

impl IndexYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_index_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("index: {err}")))
    }

    pub fn to_index_config(&self) -> IndexConfig {
        IndexConfig::new().with_parallel(self.use_parallel)
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_threshold")]
    pub threshold: u64,

    #[serde(default = "default_format")]
    pub format: String,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "matcher.version must be >= 1".to_string(),
            ));
        }
        self.report_format()?;
        Ok(())
    }

    fn report_format(&self) -> Result<ReportFormat, ConfigLoadError> {
        self.format
            .parse()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher.format: {err}")))
    }

    pub fn to_match_config(&self) -> Result<MatchConfig, ConfigLoadError> {
        Ok(MatchConfig {
            version: format!("v{}", self.version),
            threshold: self.threshold,
            format: self.report_format()?,
        })
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            threshold: default_threshold(),
            format: default_format(),
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_min_token_len() -> usize {
    2
}
fn default_common_word_cutoff() -> f64 {
    0.9
}
fn default_threshold() -> u64 {
    matcher::DEFAULT_THRESHOLD
}
fn default_format() -> String {
    "tsv".to_string()
}
