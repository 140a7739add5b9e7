//! Sliding windows over a sentence's token-id sequence.
//!
//! The first window holds the first `size` ids. Every following window starts
//! `step` ids further along, padding with empty slots once the input runs
//! out. Generation stops as soon as a step would begin with no real id left
//! to consume, or would leave only padding behind, so the iterator always
//! terminates and never yields an all-padding window.
//!
//! Padding is counted, never stored: cost follows the input length, not the
//! configured `size` or `step`.

use std::iter;

use crate::config::FingerprintError;
use crate::vocab::TokenId;

/// One fixed-length window: real ids followed by `padding` empty slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    ids: Vec<TokenId>,
    padding: usize,
}

impl Window {
    /// Every slot in window order; `None` slots are padding.
    pub fn slots(&self) -> impl Iterator<Item = Option<TokenId>> + '_ {
        self.ids
            .iter()
            .copied()
            .map(Some)
            .chain(iter::repeat(None).take(self.padding))
    }

    /// Always the configured window size, padding included.
    pub fn len(&self) -> usize {
        self.ids.len() + self.padding
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Real (non-padding) ids, in window order.
    pub fn ids(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.ids.iter().copied()
    }

    pub fn padding(&self) -> usize {
        self.padding
    }
}

/// Lazy iterator of [`Window`]s over a token-id slice.
///
/// Every yielded window is an owned snapshot; holding one does not block or
/// invalidate later ones.
#[derive(Debug, Clone)]
pub struct SlidingWindows<'a> {
    tokens: &'a [TokenId],
    size: usize,
    step: usize,
    /// Offset of the next window's first slot, `None` once exhausted.
    start: Option<usize>,
}

/// Start windowing `tokens`.
///
/// A `step` of zero is rejected. An empty input, or a `size` of zero, yields
/// no windows at all.
pub fn sliding_windows(
    tokens: &[TokenId],
    size: usize,
    step: usize,
) -> Result<SlidingWindows<'_>, FingerprintError> {
    if step < 1 {
        return Err(FingerprintError::invalid(
            "step",
            format!("must be >= 1 (got {step})"),
        ));
    }

    Ok(SlidingWindows {
        tokens,
        size,
        step,
        start: (size > 0 && !tokens.is_empty()).then_some(0),
    })
}

impl Iterator for SlidingWindows<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let start = self.start?;
        let end = start.saturating_add(self.size).min(self.tokens.len());

        // Exhaustion check: the next step must still reach a real id, both
        // beyond this window's end and at the next window's start.
        let next = start.saturating_add(self.step);
        self.start = (end < self.tokens.len() && next < self.tokens.len()).then_some(next);

        let ids = self.tokens[start..end].to_vec();
        Some(Window {
            padding: self.size - ids.len(),
            ids,
        })
    }
}
