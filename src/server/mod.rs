//! HTTP API server.
//!
//! Provides three endpoints:
//! - `/` - plaintext usage banner
//! - `/resolve` - follows a domain's redirect chain
//! - `/check-cname` - compares a domain's CNAME record with an expected target
//!
//! Handlers share read-only state only; every request is independent.

mod handlers;
mod types;

use axum::routing::get;
use axum::Router;

use handlers::{check_cname_handler, resolve_handler, usage_handler};
pub use types::AppState;

/// Builds the router with all endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(usage_handler))
        .route("/resolve", get(resolve_handler))
        .route("/check-cname", get(check_cname_handler))
        .with_state(state)
}

/// Serves the router on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
