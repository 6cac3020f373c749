//! Chirpd (v1)
//!
//! A minimal social-media backend slice built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                   CHIRPD                     │
//!                     │                                              │
//!   Client Request    │  ┌─────────┐     ┌──────────────────────┐   │
//!   ──────────────────┼─▶│  http   │────▶│ /app/*  static site  │   │
//!                     │  │ server  │     │   (hit counter)      │   │
//!                     │  └────┬────┘     └──────────────────────┘   │
//!                     │       │                                     │
//!                     │       │          ┌──────────────────────┐   │
//!                     │       ├─────────▶│ /api/*  health +     │   │
//!                     │       │          │   chirp validation   │   │
//!                     │       │          └──────────┬───────────┘   │
//!                     │       │                     ▼               │
//!                     │       │          ┌──────────────────────┐   │
//!                     │       └─────────▶│ /admin/* metrics +   │   │
//!                     │                  │   reset              │   │
//!                     │                  └──────────────────────┘   │
//!                     │                                              │
//!                     │  ┌────────────────────────────────────────┐ │
//!                     │  │         Cross-Cutting Concerns         │ │
//!                     │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │ │
//!                     │  │  │ config │ │moderation │ │lifecycle│  │ │
//!                     │  │  └────────┘ └───────────┘ └─────────┘  │ │
//!                     │  │  ┌─────────┐ ┌─────────────────────┐   │ │
//!                     │  │  │ metrics │ │    observability    │   │ │
//!                     │  │  └─────────┘ └─────────────────────┘   │ │
//!                     │  └────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use chirpd::config::{load_config, ServiceConfig};
use chirpd::lifecycle::{signals, Shutdown};
use chirpd::observability::logging;
use chirpd::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "chirpd", version, about = "Static site with chirp validation API")]
struct Args {
    /// Path to the TOML configuration file. Built-in defaults apply when omitted.
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

    // Initialize tracing subscriber
    logging::init(&config.observability.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "chirpd starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        site_root = %config.site.root,
        max_chirp_length = config.moderation.max_length,
        banned_words = config.moderation.banned_words.len(),
        legacy_routes = config.compat.legacy_routes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Ctrl+C fans out through the shutdown coordinator
    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
