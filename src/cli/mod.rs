//! CLI interface for swing-momentum
//!
//! Provides subcommands for:
//! - `analyze`: Swing pivots, momentum accuracy and return statistics per session
//! - `config`: Show the effective configuration

mod analyze;

pub use analyze::{AnalyzeArgs, OutputFormat};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "swing-momentum")]
#[command(about = "Swing detection and momentum accuracy for intraday trade prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze trade tick files, one report per session
    Analyze(AnalyzeArgs),
    /// Show configuration
    Config,
}
