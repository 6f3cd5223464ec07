//! skygate
//!
//! A small JSON gateway built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                    GATEWAY                     │
//!                    │                                                │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│ handlers │──▶│ providers  │──┼──▶ geocoding /
//!                    │  │ server  │   │          │   │            │  │    weather /
//!                    │  └─────────┘   └────┬─────┘   └────────────┘  │    quotes APIs
//!                    │                     │                         │
//!   Client Response  │                     ▼                         │
//!   ◀────────────────┼── JSON body  ┌──────────────┐                 │
//!                    │              │observability │◀── heartbeat    │
//!                    │              │  (metrics)   │    task         │
//!                    │              └──────────────┘                 │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │   config  │  error taxonomy │ lifecycle │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skygate::config::{load_config, GatewayConfig};
use skygate::observability::Metrics;
use skygate::{HttpServer, Shutdown};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "skygate", about = "Weather and quote JSON gateway")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config: GatewayConfig = load_config(args.config.as_deref())?;

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.observability.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("skygate v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        heartbeat_interval_secs = config.heartbeat.interval_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Install the metrics registry once, before any request can record.
    let metrics = Metrics::install();

    let shutdown = Shutdown::new();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            signal_shutdown.trigger();
        }
    });

    // Create and run HTTP server
    let server = HttpServer::new(config, metrics)?;
    server.run(listener, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
