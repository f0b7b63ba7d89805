//! Error handling.
//!
//! This module provides:
//! - The tagged error enumerations returned by the resolver and CNAME checker
//! - Categorization of `reqwest` failures into those variants
//! - Detection of certificate validation failures in an error chain
//!
//! Every failure is turned into a JSON body at the handler boundary, so the
//! variants carry both the user-facing message and the HTTP status.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{CnameError, ErrorKind, InitializationError, ResolveError};
