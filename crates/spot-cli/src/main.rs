//! spotwatch entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Spot price watcher: fetch current prices, compare against the last
/// recorded run, and append to the per-asset logs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via SPOT_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Also print a bare price listing for copy/paste
    #[arg(short, long)]
    bare: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    spot_telemetry::init_logging()?;

    // Config path: CLI arg > SPOT_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("SPOT_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = spot_cli::AppConfig::load(&config_path)?;

    let app = spot_cli::Application::new(config)?;
    app.run(args.bare).await?;

    Ok(())
}
