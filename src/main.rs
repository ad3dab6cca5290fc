use clap::Parser;
use swing_momentum::cli::{Cli, Commands};
use swing_momentum::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    let _telemetry = swing_momentum::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!(inputs = args.inputs.len(), "Starting analysis");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Session: {} {}-{} {} (dedup: {})",
                config.session.symbol,
                config.session.start_time,
                config.session.end_time,
                config.session.timezone,
                config.session.dedup_prices
            );
            println!("  Swing threshold: {}", config.swing.threshold);
            println!(
                "  Stats: return lag={}, autocorrelation lag={}",
                config.stats.return_lag, config.stats.autocorr_lag
            );
            println!(
                "  Telemetry: level={}, format={:?}",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
