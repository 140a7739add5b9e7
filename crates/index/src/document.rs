use std::path::{Path, PathBuf};
use std::time::Instant;

use fingerprint::{
    sentence_fingerprints, Fingerprint, FingerprintConfig, FingerprintSet, SharedVocabulary,
};
use hashbrown::HashMap;
use rayon::prelude::*;
use serde::Serialize;

use crate::{IndexConfig, IndexError};

/// Zero-based position of a sentence within its document.
pub type SentenceId = usize;

/// A document after sentence splitting and normalization.
///
/// Sentence `i` keeps both its original text (for reporting) and its cleaned
/// tokens (for fingerprinting); the two can never get out of step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedDocument {
    path: PathBuf,
    sentences: Vec<String>,
    tokens: Vec<Vec<String>>,
}

impl NormalizedDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Append the next sentence.
    pub fn push(&mut self, text: impl Into<String>, tokens: Vec<String>) {
        self.sentences.push(text.into());
        self.tokens.push(tokens);
    }

    pub fn with_sentence(mut self, text: impl Into<String>, tokens: Vec<String>) -> Self {
        self.push(text, tokens);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn sentence_tokens(&self) -> &[Vec<String>] {
        &self.tokens
    }

    /// Every token of the document, sentence by sentence.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().flatten().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Summary counters for one built index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub sentences: usize,
    /// Sentences that produced at least one fingerprint.
    pub indexed_sentences: usize,
    /// Distinct fingerprints.
    pub fingerprints: usize,
    /// Total `(fingerprint, sentence)` entries.
    pub occurrences: usize,
}

/// Inverted index from fingerprint to the sentences containing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIndex {
    path: PathBuf,
    sentences: Vec<String>,
    postings: HashMap<Fingerprint, Vec<SentenceId>>,
    stats: IndexStats,
}

impl DocumentIndex {
    /// Index `doc` against a shared vocabulary.
    ///
    /// Both configs are validated before any sentence is processed.
    /// Occurrence lists are ascending by sentence id whether or not the
    /// build runs in parallel.
    pub fn build(
        doc: &NormalizedDocument,
        vocab: &SharedVocabulary,
        fingerprint_cfg: &FingerprintConfig,
        cfg: &IndexConfig,
    ) -> Result<Self, IndexError> {
        cfg.validate()?;
        fingerprint_cfg.validate()?;
        let start = Instant::now();

        let per_sentence = |tokens: &Vec<String>| -> Result<FingerprintSet, IndexError> {
            Ok(sentence_fingerprints(&vocab.encode(tokens), fingerprint_cfg)?)
        };
        let sets: Vec<FingerprintSet> = if cfg.use_parallel {
            doc.tokens
                .par_iter()
                .map(per_sentence)
                .collect::<Result<_, _>>()?
        } else {
            doc.tokens
                .iter()
                .map(per_sentence)
                .collect::<Result<_, _>>()?
        };

        let mut postings: HashMap<Fingerprint, Vec<SentenceId>> = HashMap::new();
        let mut stats = IndexStats {
            sentences: doc.len(),
            ..Default::default()
        };
        for (sentence_id, set) in sets.into_iter().enumerate() {
            if !set.is_empty() {
                stats.indexed_sentences += 1;
            }
            stats.occurrences += set.len();
            for fp in set {
                postings.entry(fp).or_default().push(sentence_id);
            }
        }
        stats.fingerprints = postings.len();

        tracing::debug!(
            path = %doc.path.display(),
            sentences = stats.sentences,
            indexed_sentences = stats.indexed_sentences,
            fingerprints = stats.fingerprints,
            occurrences = stats.occurrences,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "document indexed"
        );

        Ok(Self {
            path: doc.path.clone(),
            sentences: doc.sentences.clone(),
            postings,
            stats,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Original text of sentence `id`.
    pub fn sentence(&self, id: SentenceId) -> Option<&str> {
        self.sentences.get(id).map(String::as_str)
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Sentence ids containing `fp`, ascending; empty when absent.
    pub fn occurrences(&self, fp: &Fingerprint) -> &[SentenceId] {
        self.postings.get(fp).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, fp: &Fingerprint) -> bool {
        self.postings.contains_key(fp)
    }

    /// Distinct fingerprints, in no particular order.
    pub fn fingerprints(&self) -> impl Iterator<Item = &Fingerprint> {
        self.postings.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Fingerprint, &[SentenceId])> {
        self.postings.iter().map(|(fp, ids)| (fp, ids.as_slice()))
    }

    pub fn fingerprint_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

/// Index both sides of a comparison.
///
/// With `use_parallel` the two builds run under `rayon::join`; either way
/// this returns only after both indexes are complete.
pub fn build_pair(
    doc_a: &NormalizedDocument,
    doc_b: &NormalizedDocument,
    vocab: &SharedVocabulary,
    fingerprint_cfg: &FingerprintConfig,
    cfg: &IndexConfig,
) -> Result<(DocumentIndex, DocumentIndex), IndexError> {
    if cfg.use_parallel {
        let (a, b) = rayon::join(
            || DocumentIndex::build(doc_a, vocab, fingerprint_cfg, cfg),
            || DocumentIndex::build(doc_b, vocab, fingerprint_cfg, cfg),
        );
        Ok((a?, b?))
    } else {
        Ok((
            DocumentIndex::build(doc_a, vocab, fingerprint_cfg, cfg)?,
            DocumentIndex::build(doc_b, vocab, fingerprint_cfg, cfg)?,
        ))
    }
}
