//! RSVP Node - serves the wedding guest registry over HTTP.

use anyhow::Context;
use clap::Parser;
use rsvp_node::{
    create_router,
    observability::{init_logging, LogFormat},
    AppState, NodeConfig, Overrides,
};
use std::net::SocketAddr;
use std::path::PathBuf;

/// RSVP Node - wedding guest registry server
#[derive(Parser, Debug)]
#[command(name = "rsvp-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API listen address
    #[arg(long)]
    api_addr: Option<SocketAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (pretty, json)
    #[arg(long)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let overrides = Overrides {
        api_addr: args.api_addr,
        log_level: args.log_level,
        log_format: args.log_format,
    };
    let config = NodeConfig::load(args.config.as_deref(), overrides)
        .context("failed to load node configuration")?;

    init_logging(&config.log_level, config.log_format);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting RSVP node");
    tracing::info!(api_addr = %config.api_addr, "Node configuration");

    let app = create_router(AppState::default());

    let listener = tokio::net::TcpListener::bind(config.api_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.api_addr))?;

    tracing::info!(addr = %config.api_addr, "Node is ready. Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("RSVP node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
