//! Tick data module
//!
//! Reads session trade prints from Parquet and stores detected pivots

mod parquet;

pub use self::parquet::{pivot_schema, trade_tick_schema, PivotRecord, TickReader, TickWriter};
