//! Swing detection types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Input errors rejected before any scan runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwingError {
    /// The price series has no observations
    #[error("Price series is empty")]
    EmptyInput,
    /// Swing threshold must be strictly positive
    #[error("Swing threshold must be positive, got {0}")]
    InvalidThreshold(Decimal),
}

/// Direction of a pivot-to-pivot move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingDirection {
    Up,
    Down,
    /// Pivot repeats the previous pivot's price
    Flat,
}

impl SwingDirection {
    /// Classify a price difference
    pub fn of(delta: Decimal) -> Self {
        if delta > Decimal::ZERO {
            SwingDirection::Up
        } else if delta < Decimal::ZERO {
            SwingDirection::Down
        } else {
            SwingDirection::Flat
        }
    }
}

/// Ordered pivot positions within a price series
///
/// Indices are strictly increasing. The first two are the seed extremes that
/// established the first qualifying swing; every later one is a point where
/// price moved at least the threshold away from the previous pivot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotSequence {
    indices: Vec<usize>,
}

impl PivotSequence {
    pub(crate) fn from_indices(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    /// Pivot indices in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of pivots
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when no qualifying swing was found
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Prices at the pivot positions of `series`
    ///
    /// Pivots past the end of `series` are skipped, so pass the series the
    /// pivots were detected on.
    pub fn prices(&self, series: &[Decimal]) -> Vec<Decimal> {
        self.indices
            .iter()
            .filter_map(|&i| series.get(i).copied())
            .collect()
    }

    /// Pivot-to-pivot price moves
    ///
    /// Moves beyond the `Decimal` range saturate and keep their sign.
    pub fn differences(&self, series: &[Decimal]) -> Vec<Decimal> {
        self.prices(series)
            .windows(2)
            .map(|w| w[1].saturating_sub(w[0]))
            .collect()
    }

    /// Direction of each pivot-to-pivot move
    pub fn directions(&self, series: &[Decimal]) -> Vec<SwingDirection> {
        self.differences(series)
            .into_iter()
            .map(SwingDirection::of)
            .collect()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.indices
    }
}

/// Share of swings that continued the previous swing's direction
///
/// `InsufficientData` is a normal outcome: fewer than three pivots leave no
/// pair of consecutive moves to compare. It is deliberately not a number so
/// that "no data" cannot be mistaken for "no momentum".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MomentumAccuracy {
    Measured {
        /// continuations / transitions, in [0, 1]
        ratio: Decimal,
        /// Consecutive move pairs in the same non-flat direction
        continuations: usize,
        /// Consecutive move pairs compared
        transitions: usize,
    },
    InsufficientData {
        /// Pivots found, always fewer than 3
        pivots: usize,
    },
}

impl MomentumAccuracy {
    pub(crate) fn from_counts(continuations: usize, transitions: usize, pivots: usize) -> Self {
        if transitions == 0 {
            return MomentumAccuracy::InsufficientData { pivots };
        }
        MomentumAccuracy::Measured {
            ratio: Decimal::from(continuations) / Decimal::from(transitions),
            continuations,
            transitions,
        }
    }

    /// The ratio, if one could be measured
    pub fn ratio(&self) -> Option<Decimal> {
        match self {
            MomentumAccuracy::Measured { ratio, .. } => Some(*ratio),
            MomentumAccuracy::InsufficientData { .. } => None,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, MomentumAccuracy::Measured { .. })
    }
}

impl fmt::Display for MomentumAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MomentumAccuracy::Measured { ratio, .. } => write!(f, "{:.4}", ratio),
            MomentumAccuracy::InsufficientData { .. } => f.write_str("insufficient data"),
        }
    }
}

/// Pivots and accuracy produced by a single scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwingAnalysis {
    pub pivots: PivotSequence,
    pub accuracy: MomentumAccuracy,
}
