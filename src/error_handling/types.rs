//! Error type definitions.
//!
//! This module defines the errors returned by initialization, the domain
//! resolver and the CNAME checker.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failures while resolving a domain's redirect chain.
///
/// The `Display` output of each variant is the message returned to callers.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Certificate validation failed, even after retrying without verification.
    #[error("SSL certificate error")]
    Tls(#[source] ReqwestError),

    /// The redirect limit was reached before a final response.
    #[error("Too many redirects")]
    TooManyRedirects,

    /// The host could not be reached (DNS failure, refused connection, etc.).
    #[error("Domain unreachable or DNS error")]
    Connection(#[source] ReqwestError),

    /// The upstream did not answer within the request timeout.
    #[error("Request timed out")]
    Timeout(#[source] ReqwestError),

    /// The input could not be turned into an http(s) URL.
    #[error("Invalid domain")]
    InvalidUrl(String),

    /// Anything else; carries the underlying error text.
    #[error("{0}")]
    Internal(String),
}

impl ResolveError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Tls(_) => ErrorKind::Tls,
            ResolveError::TooManyRedirects => ErrorKind::TooManyRedirects,
            ResolveError::Connection(_) => ErrorKind::Connection,
            ResolveError::Timeout(_) => ErrorKind::Timeout,
            ResolveError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            ResolveError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// HTTP status to respond with.
    pub fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }
}

/// Categories of resolve failures.
///
/// Mirrors the `ResolveError` variants without their payloads, for logging and
/// status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    /// Certificate validation failure
    Tls,
    /// Redirect limit reached
    TooManyRedirects,
    /// DNS or TCP connection failure
    Connection,
    /// Request timeout
    Timeout,
    /// Unusable input
    InvalidUrl,
    /// Unclassified failure
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    /// Returns the user-facing message for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Tls => "SSL certificate error",
            ErrorKind::TooManyRedirects => "Too many redirects",
            ErrorKind::Connection => "Domain unreachable or DNS error",
            ErrorKind::Timeout => "Request timed out",
            ErrorKind::InvalidUrl => "Invalid domain",
            ErrorKind::Internal => "Internal error",
        }
    }

    /// HTTP status for this category: 500 for unclassified failures, 400 otherwise.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Failures while checking a CNAME record.
///
/// Missing records and unavailable nameservers are not errors; they are
/// reported as a non-match by the checker.
#[derive(Error, Debug)]
pub enum CnameError {
    /// The resolver failed for a reason other than a missing record.
    #[error("CNAME lookup failed: {0}")]
    Lookup(#[from] hickory_resolver::error::ResolveError),
}
