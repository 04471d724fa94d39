use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use employer_cost_engine::api::{AppState, create_router};
use employer_cost_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the employer cost calculator over HTTP.
///
/// Without `--config` the built-in 2026 rate table is used. The directory,
/// when given, must contain calculator.yaml, sectors.yaml and rates.yaml.
#[derive(Parser, Debug)]
#[command(name = "employer-cost-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the rate table YAML files (e.g. config/es2026)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("Failed to load rate table from: {}", dir.display()))?,
        None => {
            info!("No --config given, using built-in rate table");
            ConfigLoader::builtin()
        }
    };

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind: {}", args.bind))?;
    info!(address = %args.bind, "Listening");

    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
