//! Server resource initialization.
//!
//! This module contains the `init_app_state` function which builds everything
//! the handlers share before the listener starts accepting connections.

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::fetch::DomainResolver;
use crate::initialization::init_resolver;
use crate::server::AppState;

/// Initialize all resources needed to serve requests.
///
/// This function performs the following initialization steps:
/// 1. Build the verified and unverified HTTP clients
/// 2. Build the DNS resolver
/// 3. Assemble the shared handler state
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built.
pub fn init_app_state(config: &Config, base_url: &str) -> Result<AppState> {
    let resolver =
        DomainResolver::from_config(config).context("Failed to initialize HTTP clients")?;
    let dns = init_resolver(config);

    info!(
        "Upstream timeout {}s, DNS timeout {}s, up to {} redirects",
        config.timeout_seconds, config.dns_timeout_seconds, config.max_redirects
    );

    Ok(AppState::new(resolver, dns, base_url))
}
