//! Session statistics module
//!
//! Return volatility and autocorrelation per session

mod returns;

pub use returns::{autocorrelation, lagged_returns, session_stats, volatility, SessionStats};

use thiserror::Error;

/// Statistics parameter errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Lags are counted in ticks and must be at least 1
    #[error("Lag must be at least 1, got {0}")]
    InvalidLag(usize),
}
