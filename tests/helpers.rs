// Shared test helpers for starting the API against mock upstreams.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::net::SocketAddr;
use std::sync::Arc;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use domain_resolver::{build_router, AppState, Config, DomainResolver};

/// A running API instance bound to an ephemeral local port.
pub struct TestApp {
    pub base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    /// Calls `/resolve` with `domain` as the query parameter.
    #[allow(dead_code)] // Used by other test files
    pub async fn get_resolve(&self, domain: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/resolve", self.base_url))
            .query(&[("domain", domain)])
            .send()
            .await
            .expect("Request to /resolve should succeed")
    }

    /// Calls `/check-cname` with both query parameters.
    #[allow(dead_code)] // Used by other test files
    pub async fn get_check_cname(&self, domain: &str, expected_cname: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/check-cname", self.base_url))
            .query(&[("domain", domain), ("expected_cname", expected_cname)])
            .send()
            .await
            .expect("Request to /check-cname should succeed")
    }
}

/// Starts the API with test defaults (2s upstream timeout, no DNS nameservers).
#[allow(dead_code)] // Used by other test files
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Starts the API after letting the caller adjust the configuration.
///
/// The DNS resolver has no nameservers, so CNAME checks never leave the machine
/// and always report a non-match.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let mut config = Config {
        timeout_seconds: 2,
        ..Default::default()
    };
    configure(&mut config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let base_url = format!(
        "http://{}",
        listener.local_addr().expect("Failed to read local address")
    );

    let resolver = DomainResolver::from_config(&config).expect("Failed to build resolver");
    let dns = TokioAsyncResolver::tokio(
        ResolverConfig::from_parts(None, vec![], NameServerConfigGroup::new()),
        ResolverOpts::default(),
    );
    let state = AppState::new(resolver, Arc::new(dns), base_url.as_str());

    let app = build_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    TestApp {
        base_url,
        client: reqwest::Client::new(),
    }
}

/// Returns an address on which nothing is listening.
#[allow(dead_code)] // Used by other test files
pub fn closed_port_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    addr
}
