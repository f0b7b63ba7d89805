//! CNAME record lookup and matching.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::CnameError;

/// Compares a CNAME target against an expected value.
///
/// Trailing dots are stripped from both sides and letter case is ignored, so
/// the fully qualified `example.com.` matches `example.com`.
pub fn cname_matches(actual: &str, expected: &str) -> bool {
    let actual = actual.trim().trim_end_matches('.');
    let expected = expected.trim().trim_end_matches('.');
    actual.eq_ignore_ascii_case(expected)
}

/// Returns true if the resolver error means "there is nothing to compare".
///
/// Covers a missing CNAME record, a non-existent domain (NXDOMAIN) and the
/// case where no nameserver could be reached at all.
pub fn is_absent_record(error: &ResolveError) -> bool {
    matches!(
        error.kind(),
        ResolveErrorKind::NoRecordsFound { .. } | ResolveErrorKind::NoConnections
    )
}

/// Queries CNAME records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The CNAME targets as returned by the nameserver (usually with a trailing
/// dot), or an empty vector if the domain has no CNAME record, does not
/// exist, or no nameserver is available.
///
/// # Errors
///
/// Returns the resolver error for any other failure (timeouts, refused
/// queries, malformed answers).
pub async fn lookup_cname_targets(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolveError> {
    match resolver.lookup(domain, RecordType::CNAME).await {
        Ok(lookup) => {
            let targets: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::CNAME(cname) = rdata {
                        Some(cname.0.to_utf8())
                    } else {
                        None
                    }
                })
                .collect();
            Ok(targets)
        }
        Err(e) if is_absent_record(&e) => {
            log::debug!("No CNAME record for {domain}: {e}");
            Ok(Vec::new())
        }
        Err(e) => {
            log::warn!("Failed to lookup CNAME records for {domain}: {e}");
            Err(e)
        }
    }
}

/// Checks whether `domain` has a CNAME record pointing at `expected_cname`.
///
/// # Returns
///
/// `Ok(true)` if any CNAME target matches, `Ok(false)` if none does or there
/// is no CNAME record at all.
///
/// # Errors
///
/// Returns `CnameError::Lookup` for resolver failures other than a missing
/// record.
pub async fn check_cname(
    domain: &str,
    expected_cname: &str,
    resolver: &TokioAsyncResolver,
) -> Result<bool, CnameError> {
    let targets = lookup_cname_targets(domain, resolver).await?;
    let matched = targets
        .iter()
        .any(|target| cname_matches(target, expected_cname));

    log::info!(
        "[CNAME] {domain} -> {} (expected {expected_cname}, match: {matched})",
        if targets.is_empty() {
            "<none>".to_string()
        } else {
            targets.join(", ")
        }
    );

    Ok(matched)
}
