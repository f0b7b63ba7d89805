//! DNS CNAME checks.
//!
//! This module provides async CNAME operations using `hickory-resolver`:
//! - CNAME target lookup, with missing records reported as an empty result
//! - Trailing-dot-insensitive comparison against an expected target

mod cname;

// Re-export public API
pub use cname::{check_cname, cname_matches, lookup_cname_targets};
