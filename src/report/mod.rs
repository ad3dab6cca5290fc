//! Session report
//!
//! Combines the swing analysis and return statistics for one
//! symbol-session and renders them for the CLI.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::stats::{session_stats, StatsError};
use crate::swing::{MomentumAccuracy, SwingError, SwingEstimator};

/// Report building errors
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Swing(#[from] SwingError),
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Analysis results for one symbol on one trading day
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub symbol: String,
    pub date: NaiveDate,
    /// Prices in the analyzed series
    pub ticks: usize,
    pub threshold: Decimal,
    /// Pivot indices into the analyzed series
    pub pivots: Vec<usize>,
    pub accuracy: MomentumAccuracy,
    pub volatility: Option<Decimal>,
    pub autocorrelation: Option<Decimal>,
}

impl SessionReport {
    /// Run the swing scan and statistics over one session's prices
    pub fn build(
        symbol: impl Into<String>,
        date: NaiveDate,
        prices: &[Decimal],
        estimator: &SwingEstimator,
        return_lag: usize,
        autocorr_lag: usize,
    ) -> Result<Self, ReportError> {
        let symbol = symbol.into();
        let analysis = estimator.analyze(prices)?;
        let stats = session_stats(prices, return_lag, autocorr_lag)?;

        if !analysis.accuracy.is_measured() {
            tracing::warn!(
                symbol = %symbol,
                %date,
                ticks = prices.len(),
                pivots = analysis.pivots.len(),
                "Insufficient pivots for momentum accuracy"
            );
        }

        Ok(Self {
            symbol,
            date,
            ticks: prices.len(),
            threshold: estimator.threshold(),
            pivots: analysis.pivots.into_inner(),
            accuracy: analysis.accuracy,
            volatility: stats.volatility,
            autocorrelation: stats.autocorrelation,
        })
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
  {} {}
══════════════════════════════════════════════════════
Ticks:             {}
Swing threshold:   {}
Pivots:            {}
Momentum accuracy: {}
Volatility:        {}
Autocorrelation:   {}
"#,
            self.symbol,
            self.date,
            self.ticks,
            self.threshold,
            self.pivots.len(),
            self.accuracy,
            format_optional(self.volatility, 6),
            format_optional(self.autocorrelation, 4),
        )
    }
}

fn format_optional(value: Option<Decimal>, dp: u32) -> String {
    match value {
        Some(v) => v.round_dp(dp).to_string(),
        None => "n/a".to_string(),
    }
}
