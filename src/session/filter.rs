//! Session preparation
//!
//! Narrows raw trade prints down to the price path the swing scan expects:
//! one symbol, inside the trading window, with consecutive repeated prices
//! removed.

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::types::{SessionWindow, TradeTick};

/// Drop ticks that repeat the previous tick's price
///
/// The first tick is always kept.
pub fn dedup_consecutive_prices(ticks: Vec<TradeTick>) -> Vec<TradeTick> {
    let mut out: Vec<TradeTick> = Vec::with_capacity(ticks.len());
    for tick in ticks {
        if out.last().map_or(true, |prev| prev.price != tick.price) {
            out.push(tick);
        }
    }
    out
}

/// Keep ticks of `symbol` inside `window`, optionally dropping repeated prices
pub fn prepare_session(
    ticks: Vec<TradeTick>,
    symbol: &str,
    window: &SessionWindow,
    dedup: bool,
) -> Vec<TradeTick> {
    let total = ticks.len();
    let windowed: Vec<TradeTick> = ticks
        .into_iter()
        .filter(|t| t.symbol == symbol && window.contains(t.timestamp))
        .collect();
    let in_window = windowed.len();

    let prepared = if dedup {
        dedup_consecutive_prices(windowed)
    } else {
        windowed
    };

    tracing::debug!(
        symbol,
        total,
        in_window,
        kept = prepared.len(),
        "Prepared session ticks"
    );

    prepared
}

/// Split ticks into local trading days, preserving order within each day
pub fn group_by_date(
    ticks: Vec<TradeTick>,
    timezone: Tz,
) -> BTreeMap<NaiveDate, Vec<TradeTick>> {
    let mut sessions: BTreeMap<NaiveDate, Vec<TradeTick>> = BTreeMap::new();
    for tick in ticks {
        sessions
            .entry(tick.local_date(timezone))
            .or_default()
            .push(tick);
    }
    sessions
}

/// Extract the price path
pub fn price_series(ticks: &[TradeTick]) -> Vec<Decimal> {
    ticks.iter().map(|t| t.price).collect()
}
