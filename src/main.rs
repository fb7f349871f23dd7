//! Contacts service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ request log ─▶ router ─▶ handler ─▶ ContactRepository
//!                                      │                                   │
//!     Client Response                  │                                   ▼
//!     ◀──────────────────────────── status + ms ◀──────────────── InMemoryContactRepository
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use contacts_service::config::{load_config, ServiceConfig};
use contacts_service::lifecycle::{startup, Shutdown};
use contacts_service::observability::{logging, metrics};
use contacts_service::HttpServer;

#[derive(Parser)]
#[command(name = "contacts-service")]
#[command(about = "In-memory contacts HTTP service", long_about = None)]
struct Args {
    /// Optional TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("contacts-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        seed_count = config.seed.count,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let contacts = startup::build_repository(&config.seed);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, contacts);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
