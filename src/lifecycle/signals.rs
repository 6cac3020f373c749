//! OS signal handling.
//!
//! # Responsibilities
//! - Register the Ctrl+C handler
//! - Translate the signal into a return so callers can trigger shutdown
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Callers own the reaction; this module only waits

/// Wait until the process receives Ctrl+C.
pub async fn wait_for_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
