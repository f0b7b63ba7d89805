//! Configuration constants.
//!
//! Defaults for timeouts, redirect limits and the outbound request identity.

/// Per-request HTTP timeout in seconds.
///
/// Applied to every hop of the redirect chain.
pub const HTTP_TIMEOUT_SECS: u64 = 5;

/// DNS query timeout in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the DNS resolver makes per nameserver before giving up
pub const DNS_ATTEMPTS: usize = 2;

/// Maximum number of redirects to follow before reporting a redirect loop.
///
/// Matches the limit most HTTP client libraries use (30 hops).
pub const MAX_REDIRECTS: usize = 30;

/// Status codes that are followed when the response carries a `Location` header.
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// Default listen address
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default User-Agent string for outbound requests.
///
/// Some sites serve different redirects (or none at all) to clients that do
/// not look like a browser, so a Chrome-like string is the default.
/// Can be overridden via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
