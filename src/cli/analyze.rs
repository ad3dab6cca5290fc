//! Analyze command implementation

use clap::{Args, ValueEnum};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::Config;
use crate::data::{PivotRecord, TickReader, TickWriter};
use crate::report::SessionReport;
use crate::session::{group_by_date, prepare_session, price_series, TradeTick};
use crate::swing::{SwingConfig, SwingError, SwingEstimator};
use crate::telemetry::{increment, set_gauge, CounterMetric, GaugeMetric};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Trade tick Parquet files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Symbol to analyze (overrides config)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Swing threshold in price units (overrides config)
    #[arg(long)]
    pub threshold: Option<Decimal>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Directory to write per-session pivot Parquet files to
    #[arg(long)]
    pub pivots_out: Option<PathBuf>,
}

/// Everything a session task needs, owned so it can move to a blocking thread
#[derive(Clone)]
struct SessionJob {
    symbol: String,
    config: Config,
    estimator: SwingEstimator,
    pivots_out: Option<PathBuf>,
}

impl SessionJob {
    fn run(&self, ticks: Vec<TradeTick>) -> anyhow::Result<Option<SessionReport>> {
        let session = &self.config.session;
        let window = session.window();
        let Some(date) = ticks.first().map(|t| window.session_date(t.timestamp)) else {
            return Ok(None);
        };

        let prepared = prepare_session(ticks, &self.symbol, &window, session.dedup_prices);
        if prepared.is_empty() {
            tracing::info!(symbol = %self.symbol, %date, "No ticks in session window, skipping");
            return Ok(None);
        }

        let prices = price_series(&prepared);
        let report = SessionReport::build(
            self.symbol.clone(),
            date,
            &prices,
            &self.estimator,
            self.config.stats.return_lag,
            self.config.stats.autocorr_lag,
        )?;

        if let Some(dir) = &self.pivots_out {
            let writer = TickWriter::new(dir.clone());
            let path = writer.file_path("pivots", &self.symbol, date);
            writer.write_pivots(&path, &PivotRecord::from_session(&prepared, &report.pivots))?;
        }

        Ok(Some(report))
    }
}

fn record_metrics(report: &SessionReport) {
    increment(CounterMetric::SessionsAnalyzed, 1);
    set_gauge(GaugeMetric::PivotCount, report.pivots.len() as f64);
    match report.accuracy.ratio() {
        Some(ratio) => set_gauge(
            GaugeMetric::MomentumAccuracy,
            ratio.to_f64().unwrap_or_default(),
        ),
        None => increment(CounterMetric::SessionsInsufficient, 1),
    }
    if let Some(vol) = report.volatility.and_then(|v| v.to_f64()) {
        set_gauge(GaugeMetric::SessionVolatility, vol);
    }
}

impl AnalyzeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let reports = self.run(config).await?;

        match self.format {
            OutputFormat::Table => {
                for report in &reports {
                    println!("{}", report.format_table());
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }

        Ok(())
    }

    /// Load the inputs and analyze every session, in date order
    pub async fn run(&self, config: &Config) -> anyhow::Result<Vec<SessionReport>> {
        let threshold = self.threshold.unwrap_or(config.swing.threshold);
        if threshold <= Decimal::ZERO {
            return Err(SwingError::InvalidThreshold(threshold).into());
        }

        let job = SessionJob {
            symbol: self
                .symbol
                .clone()
                .unwrap_or_else(|| config.session.symbol.clone()),
            config: config.clone(),
            estimator: SwingEstimator::new(SwingConfig { threshold }),
            pivots_out: self.pivots_out.clone(),
        };

        let ticks = self.load_ticks().await?;
        increment(CounterMetric::TicksLoaded, ticks.len() as u64);

        let sessions = group_by_date(ticks, config.session.timezone);
        tracing::info!(
            symbol = %job.symbol,
            %threshold,
            sessions = sessions.len(),
            "Analyzing sessions"
        );

        // Sessions share nothing, so each runs on its own blocking thread
        let mut handles = Vec::with_capacity(sessions.len());
        for (_, mut day) in sessions {
            day.sort_by_key(|t| t.timestamp);
            let job = job.clone();
            handles.push(tokio::task::spawn_blocking(move || job.run(day)));
        }

        let mut reports = Vec::new();
        for handle in handles {
            if let Some(report) = handle.await?? {
                record_metrics(&report);
                reports.push(report);
            }
        }

        Ok(reports)
    }

    async fn load_ticks(&self) -> anyhow::Result<Vec<TradeTick>> {
        let mut ticks = Vec::new();
        for input in &self.inputs {
            let reader = TickReader::new(input.clone());
            let mut loaded = tokio::task::spawn_blocking(move || reader.read_ticks()).await??;
            tracing::debug!(path = ?input, count = loaded.len(), "Loaded ticks");
            ticks.append(&mut loaded);
        }
        Ok(ticks)
    }
}
