//! Main application modules.
//!
//! This module provides input normalization and shutdown handling used by the
//! server.

pub mod shutdown;
pub mod url;

// Re-export public API
pub use self::shutdown::shutdown_signal;
pub use self::url::{normalize_domain, parse_target};
