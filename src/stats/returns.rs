//! Return-based session statistics
//!
//! Lagged simple returns over a session's price path, their dispersion, and
//! their autocorrelation. Computed in f64 and reported as Decimal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StatsError;

/// Per-session return statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Number of prices the statistics were computed from
    pub ticks: usize,
    /// Population standard deviation of lagged returns
    pub volatility: Option<Decimal>,
    /// Correlation of returns with their own lagged values
    pub autocorrelation: Option<Decimal>,
}

/// Simple returns `price[i] / price[i - lag] - 1`
///
/// The first `lag` positions have no return, as does any position whose
/// reference price is zero.
pub fn lagged_returns(prices: &[Decimal], lag: usize) -> Result<Vec<Option<f64>>, StatsError> {
    if lag == 0 {
        return Err(StatsError::InvalidLag(lag));
    }

    let values: Vec<f64> = prices
        .iter()
        .map(|p| f64::try_from(*p).unwrap_or(f64::NAN))
        .collect();

    Ok((0..values.len())
        .map(|i| {
            if i < lag {
                return None;
            }
            let prev = values[i - lag];
            let curr = values[i];
            if prev == 0.0 || !prev.is_finite() || !curr.is_finite() {
                None
            } else {
                Some(curr / prev - 1.0)
            }
        })
        .collect())
}

/// Population standard deviation of the present returns
pub fn volatility(returns: &[Option<f64>]) -> Option<Decimal> {
    let present: Vec<f64> = returns.iter().flatten().copied().collect();
    if present.len() < 2 {
        return None;
    }

    let n = present.len() as f64;
    let mean = present.iter().sum::<f64>() / n;
    let variance = present.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;

    Decimal::try_from(variance.sqrt()).ok()
}

/// Pearson correlation between `r[i]` and `r[i - lag]`
///
/// Only positions where both returns exist are paired. Returns `None` with
/// fewer than two pairs or when either side has no variance.
pub fn autocorrelation(returns: &[Option<f64>], lag: usize) -> Result<Option<Decimal>, StatsError> {
    if lag == 0 {
        return Err(StatsError::InvalidLag(lag));
    }

    let pairs: Vec<(f64, f64)> = (lag..returns.len())
        .filter_map(|i| match (returns[i], returns[i - lag]) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return Ok(None);
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator < 1e-12 {
        return Ok(None);
    }

    Ok(Decimal::try_from(cov / denominator).ok())
}

/// Volatility and autocorrelation for one session's prices
pub fn session_stats(
    prices: &[Decimal],
    return_lag: usize,
    autocorr_lag: usize,
) -> Result<SessionStats, StatsError> {
    let returns = lagged_returns(prices, return_lag)?;
    Ok(SessionStats {
        ticks: prices.len(),
        volatility: volatility(&returns),
        autocorrelation: autocorrelation(&returns, autocorr_lag)?,
    })
}
