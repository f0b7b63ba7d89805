//! Domain validation and normalization utilities.

use log::warn;
use url::Url;

use crate::error_handling::ResolveError;

/// Maximum accepted input length, in bytes.
const MAX_URL_LENGTH: usize = 2048;

/// Turns a domain into a URL string.
///
/// Adds an `https://` prefix unless the input already starts with `http://` or
/// `https://` (in any letter case), in which case it is returned unchanged.
/// Surrounding whitespace is removed.
///
/// # Examples
///
/// ```
/// use domain_resolver::normalize_domain;
///
/// assert_eq!(normalize_domain("example.com"), "https://example.com");
/// assert_eq!(normalize_domain("http://example.com"), "http://example.com");
/// ```
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    if has_http_scheme(domain) {
        domain.to_string()
    } else {
        format!("https://{domain}")
    }
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value
        .get(..8)
        .unwrap_or(value)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Normalizes a domain and parses it into the URL the resolver will request.
///
/// # Errors
///
/// Returns `ResolveError::InvalidUrl` if the input is empty, longer than
/// `MAX_URL_LENGTH`, does not parse, or has no host.
pub fn parse_target(domain: &str) -> Result<Url, ResolveError> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::InvalidUrl("empty domain".to_string()));
    }
    if trimmed.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting domain exceeding maximum length ({} > {})",
            trimmed.len(),
            MAX_URL_LENGTH
        );
        return Err(ResolveError::InvalidUrl(format!(
            "domain longer than {MAX_URL_LENGTH} characters"
        )));
    }

    let normalized = normalize_domain(trimmed);
    let url = Url::parse(&normalized).map_err(|e| {
        warn!("Rejecting invalid domain {trimmed}: {e}");
        ResolveError::InvalidUrl(e.to_string())
    })?;

    match (url.scheme(), url.host_str()) {
        ("http" | "https", Some(host)) if !host.is_empty() => Ok(url),
        _ => {
            warn!("Rejecting domain without a usable host: {trimmed}");
            Err(ResolveError::InvalidUrl(format!("no host in {normalized}")))
        }
    }
}
