//! Domain resolve handler.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Response,
};
use log::{error, warn};

use super::super::types::{AppState, ResolveFailure, ResolveParams, ResolveSuccess};
use super::{invalid_params_response, json_response};
use crate::error_handling::ErrorKind;

/// Follows the redirect chain of `domain` and reports the final destination.
///
/// Failures are returned as `{input, error, status: "error"}` with 400, or 500
/// for unclassified errors. A missing `domain` is a 400 `{error, status}`.
pub async fn resolve_handler(
    State(state): State<AppState>,
    params: Result<Query<ResolveParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return invalid_params_response(rejection),
    };
    match state.resolver.resolve(&params.domain).await {
        Ok(resolution) => json_response(StatusCode::OK, &ResolveSuccess::from(resolution)),
        Err(e) => {
            if e.kind() == ErrorKind::Internal {
                error!("Unexpected error resolving {}: {}", params.domain, e);
            } else {
                warn!("Failed to resolve {}: {}", params.domain, e);
            }
            let body = ResolveFailure {
                input: params.domain,
                error: e.to_string(),
                status: "error",
            };
            json_response(e.status_code(), &body)
        }
    }
}
