//! Error categorization.
//!
//! This module maps `reqwest` failures onto `ResolveError` variants.

use std::error::Error as StdError;

use super::types::ResolveError;

/// Categorizes a `reqwest::Error` into a `ResolveError`.
///
/// Certificate failures are checked first because they also surface as
/// connect errors. Timeouts are checked before connect errors so a connect
/// timeout is reported as a timeout.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The matching `ResolveError`; unclassified failures become `Internal`.
pub fn categorize_reqwest_error(error: reqwest::Error) -> ResolveError {
    if is_certificate_error(&error) {
        ResolveError::Tls(error)
    } else if error.is_redirect() {
        ResolveError::TooManyRedirects
    } else if error.is_timeout() {
        ResolveError::Timeout(error)
    } else if error.is_connect() {
        ResolveError::Connection(error)
    } else {
        ResolveError::Internal(describe(&error))
    }
}

/// Returns true if a certificate validation failure appears anywhere in the
/// error's source chain.
///
/// `rustls` errors usually arrive wrapped in a `std::io::Error`, whose
/// `source()` skips the wrapped value, so those are unwrapped explicitly.
/// Error text mentioning a certificate is accepted as a last resort.
pub fn is_certificate_error(error: &(dyn StdError + 'static)) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(error);
    while let Some(err) = current {
        if let Some(tls) = err.downcast_ref::<rustls::Error>() {
            if is_certificate_rustls_error(tls) {
                return true;
            }
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if let Some(tls) = io
                .get_ref()
                .and_then(|inner| inner.downcast_ref::<rustls::Error>())
            {
                if is_certificate_rustls_error(tls) {
                    return true;
                }
            }
        }
        // reqwest's own message embeds the URL, which may contain anything
        if !err.is::<reqwest::Error>() && err.to_string().to_lowercase().contains("certificate") {
            return true;
        }
        current = err.source();
    }
    false
}

fn is_certificate_rustls_error(error: &rustls::Error) -> bool {
    matches!(
        error,
        rustls::Error::InvalidCertificate(_) | rustls::Error::NoCertificatesPresented
    )
}

/// Formats an error together with its first underlying cause.
fn describe(error: &reqwest::Error) -> String {
    match error.source() {
        Some(source) => format!("{}: {}", error, source),
        None => error.to_string(),
    }
}
