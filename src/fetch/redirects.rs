//! HTTP redirect chain resolution.
//!
//! This module handles following redirect chains manually to track the full path
//! from initial URL to final destination.

use log::warn;
use url::Url;

use super::types::RedirectStep;
use crate::config::REDIRECT_STATUS_CODES;
use crate::error_handling::{categorize_reqwest_error, ResolveError};

/// Outcome of following a redirect chain to its end.
#[derive(Debug, Clone)]
pub struct RedirectChain {
    /// URL of the response that ended the chain
    pub final_url: Url,
    /// Status code of that response
    pub status_code: u16,
    /// Every hop that answered with a redirect, in order
    pub steps: Vec<RedirectStep>,
}

/// Follows the redirect chain for a URL, up to `max_redirects` redirects.
///
/// A response is followed only when its status is a redirect status AND it
/// carries a `Location` header; relative locations are resolved against the
/// URL that returned them.
///
/// # Arguments
///
/// * `start_url` - The initial URL to start from
/// * `max_redirects` - Maximum number of redirects to follow
/// * `client` - HTTP client with redirects disabled (for manual tracking)
///
/// # Errors
///
/// Returns `ResolveError::TooManyRedirects` if the chain is longer than
/// `max_redirects`, and the categorized request error if any hop fails.
pub async fn follow_redirects(
    start_url: Url,
    max_redirects: usize,
    client: &reqwest::Client,
) -> Result<RedirectChain, ResolveError> {
    let mut steps: Vec<RedirectStep> = Vec::new();
    let mut current = start_url;

    loop {
        let resp = client
            .get(current.clone())
            .send()
            .await
            .map_err(categorize_reqwest_error)?;

        let status_code = resp.status().as_u16();
        if !REDIRECT_STATUS_CODES.contains(&status_code) {
            return Ok(RedirectChain {
                final_url: current,
                status_code,
                steps,
            });
        }

        let Some(location) = resp.headers().get(reqwest::header::LOCATION) else {
            // Redirect status but no Location header - treat the response as final
            warn!(
                "Redirect status {} for {} but no Location header",
                status_code, current
            );
            return Ok(RedirectChain {
                final_url: current,
                status_code,
                steps,
            });
        };

        if steps.len() >= max_redirects {
            warn!("Exceeded {max_redirects} redirects, last hop {current}");
            return Err(ResolveError::TooManyRedirects);
        }

        let location = String::from_utf8_lossy(location.as_bytes()).into_owned();
        let next = current.join(&location).map_err(|e| {
            ResolveError::Internal(format!(
                "Invalid redirect location {location:?} from {current}: {e}"
            ))
        })?;

        steps.push(RedirectStep {
            url: current.to_string(),
            status_code,
        });
        current = next;
    }
}
