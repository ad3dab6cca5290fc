//! Configuration types for swing-momentum

use chrono::NaiveTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::session::SessionWindow;
use crate::swing::SwingConfig;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub swing: SwingSettings,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Which prints make up a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Instrument to analyze
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Session start time of day (inclusive)
    #[serde(default = "default_start_time")]
    pub start_time: NaiveTime,

    /// Session end time of day (inclusive)
    #[serde(default = "default_end_time")]
    pub end_time: NaiveTime,

    /// Exchange time zone the window and trading days are expressed in
    #[serde(default = "default_timezone")]
    pub timezone: Tz,

    /// Drop prints that repeat the previous print's price
    #[serde(default = "default_true")]
    pub dedup_prices: bool,
}

fn default_symbol() -> String {
    "SPY".to_string()
}
fn default_start_time() -> NaiveTime {
    SessionWindow::default().start
}
fn default_end_time() -> NaiveTime {
    SessionWindow::default().end
}
fn default_timezone() -> Tz {
    SessionWindow::default().timezone
}
fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            start_time: default_start_time(),
            end_time: default_end_time(),
            timezone: default_timezone(),
            dedup_prices: true,
        }
    }
}

impl SessionConfig {
    pub fn window(&self) -> SessionWindow {
        SessionWindow::new(self.start_time, self.end_time, self.timezone)
    }
}

/// Swing detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwingSettings {
    /// Minimum absolute price move that counts as a swing
    #[serde(default = "default_threshold")]
    pub threshold: Decimal,
}

fn default_threshold() -> Decimal {
    Decimal::new(5, 2) // 0.05, five ticks on a penny-quoted ETF
}

impl Default for SwingSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl From<&SwingSettings> for SwingConfig {
    fn from(settings: &SwingSettings) -> Self {
        SwingConfig {
            threshold: settings.threshold,
        }
    }
}

/// Return statistics settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Ticks between the prices a return is taken over
    #[serde(default = "default_lag")]
    pub return_lag: usize,

    /// Lag, in returns, for the autocorrelation
    #[serde(default = "default_lag")]
    pub autocorr_lag: usize,
}

fn default_lag() -> usize {
    1
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            return_lag: 1,
            autocorr_lag: 1,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
