//! Resolver result types.

use serde::Serialize;

/// One hop of a redirect chain: the URL that answered with a redirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectStep {
    /// URL that was requested
    pub url: String,
    /// Redirect status it answered with
    pub status_code: u16,
}

/// Result of resolving a domain to its final destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The domain exactly as the caller supplied it
    pub input: String,
    /// URL of the final, non-redirect response
    pub final_url: String,
    /// Status code of the final response
    pub status_code: u16,
    /// Intermediate redirects in the order they were followed
    pub history: Vec<RedirectStep>,
    /// True if the chain was only reachable with certificate verification disabled
    pub tls_bypassed: bool,
}

impl Resolution {
    /// URLs of the intermediate redirects, in order.
    pub fn history_urls(&self) -> Vec<String> {
        self.history.iter().map(|step| step.url.clone()).collect()
    }
}
