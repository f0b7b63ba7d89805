//! API data structures.

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;
use serde::{Deserialize, Serialize};

use crate::fetch::{DomainResolver, Resolution};

/// Shared state for the API handlers.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Redirect-chain resolver
    pub resolver: DomainResolver,
    /// DNS resolver for CNAME checks
    pub dns: Arc<TokioAsyncResolver>,
    /// Base URL shown in the usage banner, e.g. `http://127.0.0.1:8000`
    pub base_url: Arc<str>,
}

impl AppState {
    /// Bundles the shared resources for the router.
    pub fn new(
        resolver: DomainResolver,
        dns: Arc<TokioAsyncResolver>,
        base_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            resolver,
            dns,
            base_url: base_url.into(),
        }
    }
}

/// Query string for `/resolve`
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub domain: String,
}

/// Query string for `/check-cname`
#[derive(Debug, Deserialize)]
pub struct CnameParams {
    pub domain: String,
    pub expected_cname: String,
}

/// JSON response for a successful `/resolve`
#[derive(Debug, Serialize)]
pub struct ResolveSuccess {
    pub input: String,
    pub final_url: String,
    pub status_code: u16,
    pub history: Vec<String>,
    pub tls_bypassed: bool,
    pub status: &'static str,
}

impl From<Resolution> for ResolveSuccess {
    fn from(resolution: Resolution) -> Self {
        let history = resolution.history_urls();
        Self {
            input: resolution.input,
            final_url: resolution.final_url,
            status_code: resolution.status_code,
            history,
            tls_bypassed: resolution.tls_bypassed,
            status: "success",
        }
    }
}

/// JSON response for a failed `/resolve`
#[derive(Debug, Serialize)]
pub struct ResolveFailure {
    pub input: String,
    pub error: String,
    pub status: &'static str,
}

/// JSON response for a request whose query string could not be parsed
#[derive(Debug, Serialize)]
pub struct InvalidParams {
    pub error: String,
    pub status: &'static str,
}

/// JSON response for a completed `/check-cname`
#[derive(Debug, Serialize)]
pub struct CnameMatch {
    #[serde(rename = "match")]
    pub matched: bool,
}

/// JSON response for a `/check-cname` lookup failure
#[derive(Debug, Serialize)]
pub struct CnameFailure {
    pub error: String,
}
