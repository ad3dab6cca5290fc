//! swing-momentum: Swing detection and momentum persistence for intraday trade prices
//!
//! This library provides:
//! - Swing pivot detection with a fixed price threshold
//! - Momentum accuracy: how often a swing continues the previous one
//! - Session preparation (trading window, repeated-price filtering)
//! - Return volatility and autocorrelation
//! - Parquet tick input and pivot output
//! - Session reports and CLI

pub mod cli;
pub mod config;
pub mod data;
pub mod report;
pub mod session;
pub mod stats;
pub mod swing;
pub mod telemetry;
