use std::time::Instant;

use hashbrown::HashMap;
use index::DocumentIndex;

use crate::types::{MatchConfig, MatchError, MatchRecord, SentencePair};


/// Shared-fingerprint counts per sentence pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCountTable {
    counts: HashMap<SentencePair, u64>,
    shared_fingerprints: usize,
}

impl MatchCountTable {
    pub fn get(&self, pair: SentencePair) -> u64 {
        self.counts.get(&pair).copied().unwrap_or(0)
    }

    /// Number of sentence pairs sharing at least one fingerprint.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fingerprints present in both documents.
    pub fn shared_fingerprints(&self) -> usize {
        self.shared_fingerprints
    }

    /// Pairs with their counts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (SentencePair, u64)> + '_ {
        self.counts.iter().map(|(pair, count)| (*pair, *count))
    }

    fn bump(&mut self, pair: SentencePair) {
        *self.counts.entry(pair).or_insert(0) += 1;
    }
}

/// Count, for every sentence pair, the fingerprints both sentences contain.
///
/// Walks the fingerprints of the smaller index and probes the larger one, so
/// the cost is bounded by the smaller key set plus the occurrence products
/// of shared fingerprints.
pub fn count_sentence_matches(doc_a: &DocumentIndex, doc_b: &DocumentIndex) -> MatchCountTable {
    let mut table = MatchCountTable::default();
    let a_is_smaller = doc_a.fingerprint_count() <= doc_b.fingerprint_count();
    let (probe, other) = if a_is_smaller {
        (doc_a, doc_b)
    } else {
        (doc_b, doc_a)
    };

    for (fp, probe_ids) in probe.iter() {
        let other_ids = other.occurrences(fp);
        if other_ids.is_empty() {
            continue;
        }
        table.shared_fingerprints += 1;
        let (ids_a, ids_b) = if a_is_smaller {
            (probe_ids, other_ids)
        } else {
            (other_ids, probe_ids)
        };
        for &i in ids_a {
            for &j in ids_b {
                table.bump(SentencePair::new(i, j));
            }
        }
    }
    table
}

/// Pairs whose count exceeds `threshold`, with their sentence texts.
///
/// Ordered by descending count, ties by ascending `(a, b)`.
pub fn significant_matches(
    table: &MatchCountTable,
    threshold: u64,
    doc_a: &DocumentIndex,
    doc_b: &DocumentIndex,
) -> Vec<MatchRecord> {
    let mut kept: Vec<(SentencePair, u64)> = table
        .iter()
        .filter(|&(_, count)| count > threshold)
        .collect();
    kept.sort_by(|(pa, ca), (pb, cb)| cb.cmp(ca).then_with(|| pa.cmp(pb)));

    kept.into_iter()
        .filter_map(|(pair, count)| {
            Some(MatchRecord {
                path_a: doc_a.path().to_path_buf(),
                path_b: doc_b.path().to_path_buf(),
                count,
                pair,
                sentence_a: doc_a.sentence(pair.a)?.to_string(),
                sentence_b: doc_b.sentence(pair.b)?.to_string(),
            })
        })
        .collect()
}

/// Result of matching two indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Sentence pairs sharing at least one fingerprint.
    pub candidate_pairs: usize,
    /// Fingerprints present in both documents.
    pub shared_fingerprints: usize,
    pub records: Vec<MatchRecord>,
}

/// Matcher for reused passages between two document indexes.
#[derive(Debug, Clone)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Construct a matcher, rejecting invalid configs up front.
    pub fn new(cfg: MatchConfig) -> Result<Self, MatchError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Count shared fingerprints and keep the significant pairs.
    pub fn match_documents(&self, doc_a: &DocumentIndex, doc_b: &DocumentIndex) -> MatchOutcome {
        let start = Instant::now();
        let table = count_sentence_matches(doc_a, doc_b);
        let records = significant_matches(&table, self.cfg.threshold, doc_a, doc_b);

        tracing::debug!(
            shared_fingerprints = table.shared_fingerprints(),
            candidate_pairs = table.len(),
            reported_pairs = records.len(),
            threshold = self.cfg.threshold,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "documents matched"
        );

        MatchOutcome {
            candidate_pairs: table.len(),
            shared_fingerprints: table.shared_fingerprints(),
            records,
        }
    }
}
