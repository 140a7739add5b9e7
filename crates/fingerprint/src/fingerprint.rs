//! Canonical word-combination fingerprints.
//!
//! A fingerprint is an unordered combination of `k` token ids drawn from one
//! window. Sorting the ids ascending collapses every permutation of the same
//! combination onto one value.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FingerprintError;
use crate::vocab::TokenId;
use crate::window::Window;

/// Canonical (ascending) combination of token ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(Box<[TokenId]>);

impl Fingerprint {
    /// Canonicalize a combination by sorting its ids.
    pub fn canonicalize(ids: impl Into<Vec<TokenId>>) -> Self {
        let mut ids = ids.into();
        ids.sort_unstable();
        Fingerprint(ids.into_boxed_slice())
    }

    pub fn ids(&self) -> &[TokenId] {
        &self.0
    }

    /// Number of ids, the `k` it was generated with.
    pub fn arity(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, id) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(".")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// Distinct fingerprints of one sentence, in canonical order.
pub type FingerprintSet = BTreeSet<Fingerprint>;

/// All canonical `k`-combinations of one window.
///
/// Combinations touching a padding slot are never produced, and neither are
/// combinations that repeat an id (a word occurring twice in one window):
/// every fingerprint holds `k` strictly ascending ids. A window with fewer
/// than `k` real ids yields nothing.
pub fn fingerprints(window: &Window, k: usize) -> Result<FingerprintSet, FingerprintError> {
    let mut out = FingerprintSet::new();
    extend_fingerprints(window, k, &mut out)?;
    Ok(out)
}

pub(crate) fn extend_fingerprints(
    window: &Window,
    k: usize,
    out: &mut FingerprintSet,
) -> Result<(), FingerprintError> {
    if k < 1 {
        return Err(FingerprintError::invalid(
            "arity",
            format!("must be >= 1 (got {k})"),
        ));
    }
    // Distinct ids in ascending order: every position subset is then
    // already a canonical fingerprint.
    let mut ids: Vec<TokenId> = window.ids().collect();
    ids.sort_unstable();
    ids.dedup();

    let mut scratch: Vec<TokenId> = Vec::with_capacity(k.min(ids.len()));
    visit_combinations(ids.len(), k, |positions| {
        scratch.clear();
        scratch.extend(positions.iter().map(|&p| ids[p]));
        out.insert(Fingerprint(scratch.as_slice().into()));
    });
    Ok(())
}

/// Calls `visit` once per `k`-subset of `0..n`, in lexicographic order.
fn visit_combinations(n: usize, k: usize, mut visit: impl FnMut(&[usize])) {
    if k == 0 || k > n {
        return;
    }
    let mut positions: Vec<usize> = (0..k).collect();
    loop {
        visit(&positions);

        // Rightmost position that can still advance.
        let Some(i) = (0..k).rev().find(|&i| positions[i] != i + n - k) else {
            return;
        };
        positions[i] += 1;
        for j in i + 1..k {
            positions[j] = positions[j - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::sliding_windows;

    fn only_window(ids: &[TokenId], size: usize) -> Window {
        sliding_windows(ids, size, size).unwrap().next().unwrap()
    }

    fn as_vecs(set: &FingerprintSet) -> Vec<Vec<TokenId>> {
        set.iter().map(|fp| fp.ids().to_vec()).collect()
    }

    #[test]
    fn canonicalize_is_permutation_invariant() {
        let a = Fingerprint::canonicalize(vec![3, 1, 2]);
        let b = Fingerprint::canonicalize(vec![2, 3, 1]);
        let c = Fingerprint::canonicalize(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.ids(), &[1, 2, 3]);
        assert_eq!(a.arity(), 3);
    }

    #[test]
    fn display_joins_ids_with_dots() {
        assert_eq!(Fingerprint::canonicalize(vec![12, 4]).to_string(), "4.12");
    }

    #[test]
    fn full_window_yields_all_pairs() {
        let window = only_window(&[0, 1, 2], 3);
        let set = fingerprints(&window, 2).unwrap();
        assert_eq!(as_vecs(&set), vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn order_within_window_does_not_matter() {
        let forward = fingerprints(&only_window(&[5, 9, 2, 7], 4), 3).unwrap();
        let reversed = fingerprints(&only_window(&[7, 2, 9, 5], 4), 3).unwrap();
        assert_eq!(forward, reversed);
        assert_eq!(forward.len(), 4);
    }

    #[test]
    fn padding_slots_never_contribute() {
        let window = only_window(&[4, 8], 5);
        assert_eq!(window.padding(), 3);
        let set = fingerprints(&window, 2).unwrap();
        assert_eq!(as_vecs(&set), vec![vec![4, 8]]);
    }

    #[test]
    fn arity_above_real_ids_yields_nothing() {
        let window = only_window(&[4, 8], 5);
        assert!(fingerprints(&window, 3).unwrap().is_empty());
    }

    #[test]
    fn repeated_ids_do_not_form_fingerprints() {
        let window = only_window(&[1, 1, 2], 3);
        let set = fingerprints(&window, 2).unwrap();
        assert_eq!(as_vecs(&set), vec![vec![1, 2]]);
    }

    #[test]
    fn repeats_collapse_before_enumeration() {
        let window = only_window(&[3, 1, 3, 1, 3, 2], 6);
        let set = fingerprints(&window, 2).unwrap();
        assert_eq!(as_vecs(&set), vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
        assert!(fingerprints(&window, 4).unwrap().is_empty());
    }

    #[test]
    fn huge_arity_yields_nothing() {
        let window = only_window(&[1, 2, 3], 3);
        assert!(fingerprints(&window, usize::MAX / 4).unwrap().is_empty());
    }

    #[test]
    fn zero_arity_rejected() {
        let window = only_window(&[1, 2], 2);
        assert!(matches!(
            fingerprints(&window, 0),
            Err(FingerprintError::InvalidParameter { name: "arity", .. })
        ));
    }

    #[test]
    fn combination_count_matches_binomial() {
        let ids: Vec<TokenId> = (0..8).collect();
        let window = only_window(&ids, 8);
        assert_eq!(fingerprints(&window, 3).unwrap().len(), 56);
        assert_eq!(fingerprints(&window, 8).unwrap().len(), 1);
        assert_eq!(fingerprints(&window, 1).unwrap().len(), 8);
    }

    #[test]
    fn visit_combinations_is_lexicographic() {
        let mut seen = Vec::new();
        visit_combinations(4, 2, |c| seen.push(c.to_vec()));
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }
}
