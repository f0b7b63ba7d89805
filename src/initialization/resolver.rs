//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{Config, DNS_ATTEMPTS};

/// Initializes the DNS resolver used for CNAME checks.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix) when it
/// can be read, falling back to the library default (Google public DNS)
/// otherwise. Timeouts are short so a dead nameserver cannot stall a request.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across handlers.
pub fn init_resolver(config: &Config) -> Arc<TokioAsyncResolver> {
    let (resolver_config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(config.dns_timeout_seconds);
    opts.attempts = DNS_ATTEMPTS;
    // Queried names are always absolute; never append search domains
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(resolver_config, opts))
}
