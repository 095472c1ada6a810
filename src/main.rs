//! Phone catalog service.
//!
//! A small REST service over a catalog of cell phone records.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::Router ──▶ http::handlers
//!                     (middleware,     (method + path     (catalog filters,
//!                      catch-all)       → Endpoint)        codec)
//!                                                              │
//!     Client Response                                          ▼
//!     ◀────────────── status + JSON / text ◀──────────── catalog::CatalogSource
//! ```
//!
//! # Endpoints
//! - `GET /health`, `GET /utc`
//! - `GET /api/phones`, `GET /api/phones/{id}`
//! - `GET /api/phones/make/{make}`, `GET /api/phones/os/{os}`
//! - `POST /api/phones`

use std::path::PathBuf;

use clap::Parser;

use phone_catalog::config::{load_config, ServiceConfig};
use phone_catalog::lifecycle::{self, signals, Shutdown};
use phone_catalog::observability::logging;

#[derive(Parser)]
#[command(name = "phone-catalog")]
#[command(about = "Phone catalog REST service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
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

    logging::init_logging(&config.observability.log_level);
    tracing::info!("phone-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        not_found_status = config.api.not_found_status,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    lifecycle::run(config, server_shutdown).await?;
    Ok(())
}
