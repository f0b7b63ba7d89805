//! Domain resolution.
//!
//! Follows a domain's redirect chain and reports where it ends up. A chain that
//! fails certificate validation is retried once without verification.

mod redirects;
mod types;

use std::sync::Arc;

use log::{info, warn};

use crate::app::parse_target;
use crate::config::Config;
use crate::error_handling::{InitializationError, ResolveError};
use crate::initialization::{init_redirect_client, init_unverified_redirect_client};

pub use redirects::follow_redirects;
pub use types::{RedirectStep, Resolution};

/// Resolves domains by following their redirect chains.
///
/// Holds two clients with redirects disabled: one that verifies certificates
/// and one that does not, used only for the single retry after a certificate
/// error. Cheap to clone.
#[derive(Clone)]
pub struct DomainResolver {
    client: Arc<reqwest::Client>,
    unverified_client: Arc<reqwest::Client>,
    max_redirects: usize,
}

impl DomainResolver {
    /// Creates a resolver from pre-built clients.
    ///
    /// Both clients must have redirects disabled, otherwise the chain is
    /// collapsed into a single hop.
    pub fn new(
        client: Arc<reqwest::Client>,
        unverified_client: Arc<reqwest::Client>,
        max_redirects: usize,
    ) -> Self {
        Self {
            client,
            unverified_client,
            max_redirects,
        }
    }

    /// Builds both clients from the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if a client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(
            init_redirect_client(config)?,
            init_unverified_redirect_client(config)?,
            config.max_redirects,
        ))
    }

    /// Resolves `domain` to its final URL.
    ///
    /// Adds `https://` if the domain has no scheme, then follows redirects. On a
    /// certificate validation error the whole chain is retried exactly once
    /// with verification disabled; a successful retry is flagged with
    /// `tls_bypassed`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidUrl` for unusable input, otherwise the
    /// categorized failure of the last attempt.
    pub async fn resolve(&self, domain: &str) -> Result<Resolution, ResolveError> {
        let target = parse_target(domain)?;

        let (chain, tls_bypassed) =
            match follow_redirects(target.clone(), self.max_redirects, &self.client).await {
                Ok(chain) => (chain, false),
                Err(ResolveError::Tls(e)) => {
                    warn!(
                        "Certificate verification failed for {target} ({e}), retrying without verification"
                    );
                    let chain =
                        follow_redirects(target, self.max_redirects, &self.unverified_client)
                            .await?;
                    (chain, true)
                }
                Err(e) => return Err(e),
            };

        for (i, step) in chain.steps.iter().enumerate() {
            info!("[Redirect {}] {} - {}", i + 1, step.status_code, step.url);
        }
        info!("[Final URL] {} - {}", chain.status_code, chain.final_url);

        Ok(Resolution {
            input: domain.to_string(),
            final_url: chain.final_url.to_string(),
            status_code: chain.status_code,
            history: chain.steps,
            tls_bypassed,
        })
    }
}

#[cfg(test)]
mod tests;
