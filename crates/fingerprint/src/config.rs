//! Configuration and error types for combinatorial fingerprinting.
//!
//! The fingerprint layer is a pure function of `(token ids, config)`: no I/O,
//! no clocks and no global state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Run parameters for window generation and combination expansion.
///
/// None of the three parameters has a default: they shape every fingerprint,
/// so the caller must always choose them explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FingerprintConfig {
    /// Configuration schema version.
    ///
    /// Any algorithmic change that can affect fingerprints must bump this.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Number of token slots per window (`S`).
    pub window_size: usize,
    /// Tokens the window advances by between consecutive windows (`T`).
    ///
    /// Consecutive windows overlap by `S - T` slots when `T < S`.
    pub step: usize,
    /// Number of token ids per fingerprint (`k`).
    pub arity: usize,
}

fn default_version() -> u32 {
    1
}

impl FingerprintConfig {
    pub fn new(window_size: usize, step: usize, arity: usize) -> Self {
        Self {
            version: default_version(),
            window_size,
            step,
            arity,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), FingerprintError> {
        if self.version < 1 {
            return Err(FingerprintError::invalid(
                "version",
                format!("must be >= 1 (got {})", self.version),
            ));
        }
        if self.window_size < 1 {
            return Err(FingerprintError::invalid(
                "window_size",
                format!("must be >= 1 (got {})", self.window_size),
            ));
        }
        if self.step < 1 {
            return Err(FingerprintError::invalid(
                "step",
                format!("must be >= 1 (got {})", self.step),
            ));
        }
        if self.arity < 1 {
            return Err(FingerprintError::invalid(
                "arity",
                format!("must be >= 1 (got {})", self.arity),
            ));
        }
        Ok(())
    }

    /// Upper bound on fingerprints a single full window can produce,
    /// `C(window_size, arity)`, saturating at `u64::MAX`.
    pub fn combinations_per_window(&self) -> u64 {
        binomial(self.window_size as u64, self.arity as u64)
    }
}

fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Errors returned by the fingerprint layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl FingerprintError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        FingerprintError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
