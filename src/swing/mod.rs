//! Swing detection module
//!
//! Finds the pivots of a session's price path (moves of at least a fixed
//! magnitude) and measures how often one swing continues the direction of
//! the swing before it.

mod detector;
mod types;

pub use detector::{analyze_swings, detect_pivots, momentum_accuracy, SwingConfig, SwingEstimator};
pub use types::{MomentumAccuracy, PivotSequence, SwingAnalysis, SwingDirection, SwingError};
