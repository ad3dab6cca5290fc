//! Trading session module
//!
//! Trade print types and the filtering that turns a day's prints into a
//! price series for one instrument.

mod filter;
mod types;

pub use filter::{dedup_consecutive_prices, group_by_date, prepare_session, price_series};
pub use types::{SessionWindow, TradeTick};
