//! Trade tick and session window types

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single trade print
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeTick {
    /// Trade time
    pub timestamp: DateTime<Utc>,
    /// Instrument symbol (e.g., "SPY")
    pub symbol: String,
    /// Trade price
    pub price: Decimal,
    /// Trade size
    pub size: Decimal,
}

impl TradeTick {
    pub fn new(
        timestamp: DateTime<Utc>,
        symbol: impl Into<String>,
        price: Decimal,
        size: Decimal,
    ) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            price,
            size,
        }
    }

    /// Trading day the tick belongs to in the exchange's time zone
    pub fn local_date(&self, timezone: Tz) -> NaiveDate {
        self.timestamp.with_timezone(&timezone).date_naive()
    }
}

/// Exchange-local time-of-day window for a trading session, inclusive at
/// both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub timezone: Tz,
}

impl Default for SessionWindow {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 30, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(15, 0, 0).unwrap_or(NaiveTime::MIN),
            timezone: chrono_tz::America::Chicago,
        }
    }
}

impl SessionWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, timezone: Tz) -> Self {
        Self {
            start,
            end,
            timezone,
        }
    }

    /// Check whether a timestamp's local time of day falls inside the window
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let t = timestamp.with_timezone(&self.timezone).time();
        t >= self.start && t <= self.end
    }

    /// Local trading day of a timestamp
    pub fn session_date(&self, timestamp: DateTime<Utc>) -> NaiveDate {
        timestamp.with_timezone(&self.timezone).date_naive()
    }
}
