//! Graceful shutdown handling.

use log::{info, warn};

/// Resolves once the process receives Ctrl-C.
///
/// Passed to `axum::serve(..).with_graceful_shutdown(..)` so in-flight
/// requests finish before the server exits. If the signal handler cannot be
/// installed the future never resolves and the server runs until killed.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining in-flight requests"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
