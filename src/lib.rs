//! domain_resolver library: redirect-chain and CNAME diagnostics over HTTP
//!
//! This library provides a small axum service with two diagnostic endpoints:
//! `/resolve` follows a domain's HTTP redirects and reports where it ends up,
//! and `/check-cname` compares a domain's CNAME record with an expected
//! target. Both operations are also usable directly.
//!
//! # Example
//!
//! ```no_run
//! use domain_resolver::{Config, DomainResolver};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = DomainResolver::from_config(&Config::default())?;
//! let resolution = resolver.resolve("example.com").await?;
//! println!("{} -> {} ({})", resolution.input, resolution.final_url, resolution.status_code);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod dns;
mod error_handling;
mod fetch;
pub mod initialization;
mod run;
mod server;

// Re-export public API
pub use app::{normalize_domain, parse_target};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{check_cname, cname_matches, lookup_cname_targets};
pub use error_handling::{CnameError, ErrorKind, InitializationError, ResolveError};
pub use fetch::{DomainResolver, RedirectStep, Resolution};
pub use run::{init_app_state, run_server};
pub use server::{build_router, AppState};
