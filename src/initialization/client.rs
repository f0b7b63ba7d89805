//! HTTP client initialization.
//!
//! Both clients have redirects disabled so the resolver can follow the chain
//! hop by hop and record every intermediate URL.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for the first resolve attempt.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Per-request timeout from config
/// - Redirects disabled (followed manually)
/// - Certificate verification enabled
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = base_builder(config).build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client used for the retry after a certificate error.
///
/// Identical to [`init_redirect_client`] except that certificate validation
/// is disabled. Only used for a single retry of a chain that already failed
/// verification.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_unverified_redirect_client(
    config: &Config,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = base_builder(config)
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(Arc::new(client))
}

fn base_builder(config: &Config) -> ClientBuilder {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
}
