//! Swing detection and momentum accuracy
//!
//! The scan runs in two phases:
//! 1. Seeding: track the running max and min from the first price until their
//!    gap reaches the threshold. Those two points are the first pivots.
//! 2. Tracking: from the later seed, every price at least `threshold` away
//!    from the last pivot's price becomes the next pivot.
//!
//! Momentum accuracy is then the share of consecutive pivot-to-pivot moves
//! that share a non-zero sign (same direction twice in a row).

use rust_decimal::prelude::Signed;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{MomentumAccuracy, PivotSequence, SwingAnalysis, SwingError};

/// Configuration for swing detection
#[derive(Debug, Clone)]
pub struct SwingConfig {
    /// Minimum absolute price move that qualifies as a swing (default: 0.05)
    pub threshold: Decimal,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            threshold: dec!(0.05),
        }
    }
}

/// Stateless estimator bound to one threshold
///
/// Holds configuration only, so a single instance can be shared across
/// threads and called on independent series.
#[derive(Debug, Clone, Default)]
pub struct SwingEstimator {
    config: SwingConfig,
}

impl SwingEstimator {
    pub fn new(config: SwingConfig) -> Self {
        Self { config }
    }

    pub fn threshold(&self) -> Decimal {
        self.config.threshold
    }

    pub fn detect_pivots(&self, series: &[Decimal]) -> Result<PivotSequence, SwingError> {
        detect_pivots(series, self.config.threshold)
    }

    pub fn momentum_accuracy(&self, series: &[Decimal]) -> Result<MomentumAccuracy, SwingError> {
        momentum_accuracy(series, self.config.threshold)
    }

    pub fn analyze(&self, series: &[Decimal]) -> Result<SwingAnalysis, SwingError> {
        analyze_swings(series, self.config.threshold)
    }
}

/// Whether `a` and `b` are at least `threshold` apart
///
/// A gap too wide to represent as a `Decimal` always qualifies.
fn moved_at_least(a: Decimal, b: Decimal, threshold: Decimal) -> bool {
    a.checked_sub(b).map_or(true, |gap| gap.abs() >= threshold)
}

fn validate(series: &[Decimal], threshold: Decimal) -> Result<(), SwingError> {
    if series.is_empty() {
        return Err(SwingError::EmptyInput);
    }
    if threshold <= Decimal::ZERO {
        return Err(SwingError::InvalidThreshold(threshold));
    }
    Ok(())
}

/// Detect swing pivots in `series`
///
/// Returns an empty sequence when the max/min gap never reaches `threshold`.
/// Otherwise the result holds at least the two seed pivots.
pub fn detect_pivots(series: &[Decimal], threshold: Decimal) -> Result<PivotSequence, SwingError> {
    validate(series, threshold)?;

    let (mut max, mut max_idx) = (series[0], 0usize);
    let (mut min, mut min_idx) = (series[0], 0usize);
    let mut seeded = false;

    for (idx, &price) in series.iter().enumerate().skip(1) {
        if price > max {
            max = price;
            max_idx = idx;
        }
        if price < min {
            min = price;
            min_idx = idx;
        }
        if moved_at_least(max, min, threshold) {
            seeded = true;
            break;
        }
    }

    if !seeded {
        tracing::trace!(len = series.len(), %threshold, "No qualifying swing in series");
        return Ok(PivotSequence::default());
    }

    // Gap > 0 implies the seeds sit at distinct indices
    let (first, second) = if min_idx < max_idx {
        (min_idx, max_idx)
    } else {
        (max_idx, min_idx)
    };

    let mut indices = vec![first, second];
    let mut last_price = series[second];
    for (idx, &price) in series.iter().enumerate().skip(second + 1) {
        if moved_at_least(price, last_price, threshold) {
            indices.push(idx);
            last_price = price;
        }
    }

    Ok(PivotSequence::from_indices(indices))
}

/// Count consecutive move pairs that kept their direction
///
/// Returns `(continuations, transitions)`. Only the signs are compared, so
/// a flat move on either side is not a continuation.
pub(crate) fn count_continuations(differences: &[Decimal]) -> (usize, usize) {
    let transitions = differences.len().saturating_sub(1);
    let continuations = differences
        .windows(2)
        .filter(|w| !w[0].is_zero() && w[0].signum() == w[1].signum())
        .count();
    (continuations, transitions)
}

/// Detect pivots and measure momentum accuracy in one scan
pub fn analyze_swings(series: &[Decimal], threshold: Decimal) -> Result<SwingAnalysis, SwingError> {
    let pivots = detect_pivots(series, threshold)?;
    let differences = pivots.differences(series);
    let (continuations, transitions) = count_continuations(&differences);
    let accuracy = MomentumAccuracy::from_counts(continuations, transitions, pivots.len());

    tracing::debug!(
        len = series.len(),
        %threshold,
        pivots = pivots.len(),
        continuations,
        transitions,
        "Swing analysis complete"
    );

    Ok(SwingAnalysis { pivots, accuracy })
}

/// Share of pivot-to-pivot moves that continue the previous move's direction
pub fn momentum_accuracy(
    series: &[Decimal],
    threshold: Decimal,
) -> Result<MomentumAccuracy, SwingError> {
    Ok(analyze_swings(series, threshold)?.accuracy)
}
