//! CNAME check handler.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::Response,
};

use super::super::types::{AppState, CnameFailure, CnameMatch, CnameParams};
use super::{invalid_params_response, json_response};
use crate::dns::check_cname;

/// Reports whether `domain`'s CNAME record points at `expected_cname`.
///
/// Always answers 200: `{match: bool}` on a completed lookup (a missing record
/// is `false`), `{error: string}` if the lookup itself failed. Missing
/// parameters are a 400 `{error, status}`.
pub async fn check_cname_handler(
    State(state): State<AppState>,
    params: Result<Query<CnameParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return invalid_params_response(rejection),
    };
    match check_cname(&params.domain, &params.expected_cname, &state.dns).await {
        Ok(matched) => json_response(StatusCode::OK, &CnameMatch { matched }),
        Err(e) => json_response(
            StatusCode::OK,
            &CnameFailure {
                error: e.to_string(),
            },
        ),
    }
}
