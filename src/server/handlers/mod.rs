//! API HTTP handlers.

mod cname;
mod resolve;
mod usage;

use axum::{
    extract::rejection::QueryRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use log::warn;
use serde::Serialize;

use super::types::InvalidParams;

pub use cname::check_cname_handler;
pub use resolve::resolve_handler;
pub use usage::usage_handler;

/// Serializes `body` as the JSON response with the given status.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(json) => (status, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize response: {}", e),
        )
            .into_response(),
    }
}

/// 400 JSON body for a missing or malformed query parameter.
fn invalid_params_response(rejection: QueryRejection) -> Response {
    let error = rejection.body_text();
    warn!("Rejected request: {}", error);
    json_response(
        StatusCode::BAD_REQUEST,
        &InvalidParams {
            error,
            status: "error",
        },
    )
}
