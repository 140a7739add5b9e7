//! Static resource tables consulted during normalization.
//!
//! A [`NormalizationContext`] is built once, before any document is read, and
//! is immutable afterwards. It owns the orthographic-variant map, the stopword
//! set, the relative frequency table and the stemmer.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use fxhash::{FxHashMap, FxHashSet};
use rust_stemmers::{Algorithm, Stemmer};

use crate::config::{NormalizeConfig, UNKNOWN_WORD_FREQUENCY};
use crate::error::CanonicalError;

/// File name of the orthographic-variant table inside a resource directory.
pub const ORTHOGRAPHIC_VARIANTS_FILE: &str = "orthographic_variants.txt";
/// File name of the stopword list inside a resource directory.
pub const STOPWORDS_FILE: &str = "stopwords.txt";
/// File name of the relative frequency table inside a resource directory.
pub const FREQUENCIES_FILE: &str = "frequencies.txt";

const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "me", "more", "my",
    "no", "not", "of", "on", "or", "our", "shall", "she", "so", "some", "such", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "those", "to", "upon",
    "us", "was", "we", "were", "what", "when", "which", "who", "will", "with", "would", "you",
    "your",
];

/// Immutable normalization state shared by every sentence of a run.
pub struct NormalizationContext {
    config: NormalizeConfig,
    orthographic: FxHashMap<String, String>,
    stopwords: FxHashSet<String>,
    frequencies: FxHashMap<String, f64>,
    stemmer: Option<Stemmer>,
}

impl fmt::Debug for NormalizationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizationContext")
            .field("config", &self.config)
            .field("orthographic_variants", &self.orthographic.len())
            .field("stopwords", &self.stopwords.len())
            .field("frequencies", &self.frequencies.len())
            .field("stemmer", &self.stemmer.is_some())
            .finish()
    }
}

impl NormalizationContext {
    /// Start building a context for the given config.
    pub fn builder(config: NormalizeConfig) -> NormalizationContextBuilder {
        NormalizationContextBuilder {
            config,
            orthographic: FxHashMap::default(),
            stopwords: None,
            frequencies: FxHashMap::default(),
        }
    }

    /// Context with the built-in stopword list and no other tables.
    pub fn with_defaults(config: NormalizeConfig) -> Result<Self, CanonicalError> {
        Self::builder(config).build()
    }

    /// Load every table present in `dir`; absent files are skipped.
    pub fn from_resource_dir(
        config: NormalizeConfig,
        dir: impl AsRef<Path>,
    ) -> Result<Self, CanonicalError> {
        let dir = dir.as_ref();
        let mut builder = Self::builder(config);

        let ortho = dir.join(ORTHOGRAPHIC_VARIANTS_FILE);
        if ortho.is_file() {
            builder = builder.orthographic_variants_file(&ortho)?;
        }
        let stopwords = dir.join(STOPWORDS_FILE);
        if stopwords.is_file() {
            builder = builder.stopwords_file(&stopwords)?;
        }
        let frequencies = dir.join(FREQUENCIES_FILE);
        if frequencies.is_file() {
            builder = builder.frequency_file(&frequencies)?;
        }
        builder.build()
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Controlled spelling for `word`, or `word` itself.
    pub fn standardize<'a>(&'a self, word: &'a str) -> &'a str {
        self.orthographic
            .get(word)
            .map(String::as_str)
            .unwrap_or(word)
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Relative frequency of `word`; unknown words are treated as rare.
    pub fn frequency(&self, word: &str) -> f64 {
        self.frequencies
            .get(word)
            .copied()
            .unwrap_or(UNKNOWN_WORD_FREQUENCY)
    }

    pub(crate) fn stem(&self, word: String) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(&word).into_owned(),
            None => word,
        }
    }
}

/// Builder for [`NormalizationContext`].
pub struct NormalizationContextBuilder {
    config: NormalizeConfig,
    orthographic: FxHashMap<String, String>,
    stopwords: Option<FxHashSet<String>>,
    frequencies: FxHashMap<String, f64>,
}

impl NormalizationContextBuilder {
    /// Add a single `variant -> standard` spelling.
    pub fn orthographic_variant(mut self, variant: &str, standard: &str) -> Self {
        self.orthographic
            .insert(variant.to_lowercase(), standard.to_lowercase());
        self
    }

    /// Replace the built-in stopword list.
    pub fn stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = Some(
            words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        );
        self
    }

    pub fn frequency(mut self, word: &str, frequency: f64) -> Self {
        self.frequencies.insert(word.to_lowercase(), frequency);
        self
    }

    /// Tab-separated `variant\tstandard` rows, one per line.
    pub fn orthographic_variants_file(mut self, path: &Path) -> Result<Self, CanonicalError> {
        let contents = read_resource(path)?;
        for (line_no, row) in data_rows(&contents) {
            let (variant, standard) = split_pair(row).ok_or_else(|| {
                resource_error(path, format!("line {line_no}: expected two tab-separated columns"))
            })?;
            self = self.orthographic_variant(variant, standard);
        }
        Ok(self)
    }

    /// Whitespace-separated stopwords.
    pub fn stopwords_file(self, path: &Path) -> Result<Self, CanonicalError> {
        let contents = read_resource(path)?;
        Ok(self.stopwords(contents.split_whitespace()))
    }

    /// Tab-separated `word\tfrequency` rows, one per line.
    pub fn frequency_file(mut self, path: &Path) -> Result<Self, CanonicalError> {
        let contents = read_resource(path)?;
        for (line_no, row) in data_rows(&contents) {
            let (word, value) = split_pair(row).ok_or_else(|| {
                resource_error(path, format!("line {line_no}: expected two tab-separated columns"))
            })?;
            let frequency: f64 = value.trim().parse().map_err(|_| {
                resource_error(path, format!("line {line_no}: invalid frequency {value:?}"))
            })?;
            self = self.frequency(word, frequency);
        }
        Ok(self)
    }

    pub fn build(self) -> Result<NormalizationContext, CanonicalError> {
        self.config.validate()?;
        let stopwords = self.stopwords.unwrap_or_else(|| {
            DEFAULT_STOPWORDS.iter().map(|w| (*w).to_string()).collect()
        });
        let stemmer = self
            .config
            .stem
            .then(|| Stemmer::create(Algorithm::English));

        tracing::debug!(
            orthographic_variants = self.orthographic.len(),
            stopwords = stopwords.len(),
            frequencies = self.frequencies.len(),
            stem = self.config.stem,
            "normalization context ready"
        );

        Ok(NormalizationContext {
            config: self.config,
            orthographic: self.orthographic,
            stopwords,
            frequencies: self.frequencies,
            stemmer,
        })
    }
}

fn read_resource(path: &Path) -> Result<String, CanonicalError> {
    fs::read_to_string(path).map_err(|err| resource_error(path, err.to_string()))
}

fn resource_error(path: &Path, reason: String) -> CanonicalError {
    CanonicalError::Resource {
        path: PathBuf::from(path),
        reason,
    }
}

/// Non-blank lines with their 1-based line numbers.
fn data_rows(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn split_pair(row: &str) -> Option<(&str, &str)> {
    let mut cols = row.split('\t');
    let first = cols.next()?.trim();
    let second = cols.next()?.trim();
    if first.is_empty() || second.is_empty() {
        return None;
    }
    Some((first, second))
}
