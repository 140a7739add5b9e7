//! Shared vocabulary between the two compared documents.
//!
//! Construction is two-phase: the full intersection is computed first, then
//! dense ids are assigned once. The result is immutable for the rest of the
//! run, so no lookup can ever mint a new id.

use fxhash::{FxHashMap, FxHashSet};

/// Dense integer id of a shared-vocabulary token.
pub type TokenId = u32;

/// Tokens present in both documents, with a stable token → id bijection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedVocabulary {
    ids: FxHashMap<String, TokenId>,
    tokens: Vec<String>,
}

impl SharedVocabulary {
    /// Intersect the token streams of two documents.
    ///
    /// Ids follow the order in which shared tokens first appear in `doc_a`,
    /// so the mapping is identical across runs on the same input.
    pub fn intersect<A, B, S, T>(doc_a: A, doc_b: B) -> Self
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let in_b: FxHashSet<String> = doc_b
            .into_iter()
            .map(|token| token.as_ref().to_owned())
            .collect();

        let mut vocab = SharedVocabulary::default();
        for token in doc_a {
            let token = token.as_ref();
            if in_b.contains(token) && !vocab.ids.contains_key(token) {
                // Bounded by the distinct words of one document.
                let id = vocab.tokens.len() as TokenId;
                vocab.ids.insert(token.to_owned(), id);
                vocab.tokens.push(token.to_owned());
            }
        }

        tracing::debug!(shared = vocab.len(), "shared vocabulary built");
        vocab
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    pub fn id(&self, token: &str) -> Option<TokenId> {
        self.ids.get(token).copied()
    }

    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }

    /// Tokens in id order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Map a sentence onto ids, dropping tokens outside the vocabulary.
    ///
    /// Dropped tokens are removed, not replaced, so the result can be
    /// shorter than the input and former neighbours of a dropped token
    /// become adjacent.
    pub fn encode<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<TokenId> {
        tokens
            .iter()
            .filter_map(|token| self.id(token.as_ref()))
            .collect()
    }
}
