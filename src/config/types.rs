//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS, HTTP_TIMEOUT_SECS,
    MAX_REDIRECTS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Server configuration.
///
/// Parsed from the command line by the binary; the `Default` impl lets the
/// library and tests build one programmatically.
///
/// # Examples
///
/// ```bash
/// # Listen on all interfaces with a longer upstream timeout
/// domain_resolver --host 0.0.0.0 --port 8080 --timeout-seconds 10
///
/// # Structured logs
/// domain_resolver --log-format json --log-level debug
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_resolver",
    about = "Follows a domain's redirect chain and checks CNAME records over HTTP."
)]
pub struct Config {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds for each hop of the redirect chain
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// DNS query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// HTTP User-Agent header value for outbound requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Config {
    /// Returns the `host:port` string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            max_redirects: MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
