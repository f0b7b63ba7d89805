//! Server startup.

mod init;

use anyhow::{Context, Result};
use log::info;

use crate::app::shutdown_signal;
use crate::config::Config;
use crate::server::serve;

pub use init::init_app_state;

/// Runs the HTTP server with the provided configuration until Ctrl-C.
///
/// Logging and the TLS crypto provider are process-wide and are expected to
/// be set up by the caller (see the binary's `main`).
///
/// # Errors
///
/// This function will return an error if:
/// - The HTTP clients cannot be built
/// - The listen address cannot be bound
/// - The server fails while running
///
/// # Example
///
/// ```no_run
/// use domain_resolver::{run_server, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     port: 8080,
///     ..Default::default()
/// };
/// run_server(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_server(config: Config) -> Result<()> {
    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;
    let local_addr = listener
        .local_addr()
        .context("Failed to read bound address")?;
    let base_url = format!("http://{}", local_addr);

    let state = init_app_state(&config, &base_url)?;

    info!("Server listening on {}/", base_url);
    info!("  - Resolve: {}/resolve?domain=example.com", base_url);
    info!(
        "  - CNAME check: {}/check-cname?domain=<domain>&expected_cname=<target>",
        base_url
    );

    serve(listener, state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
