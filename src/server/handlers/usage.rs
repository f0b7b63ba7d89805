//! Usage banner handler.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::super::types::AppState;

/// Plaintext banner describing how to call the API.
pub async fn usage_handler(State(state): State<AppState>) -> Response {
    let banner = format!(
        "✅ API is up!\n\
         \n\
         To use this API, make a request like:\n\
         curl \"{base}/resolve?domain=example.com\"\n\
         curl \"{base}/check-cname?domain=custom.example.com&expected_cname=target.example.net\"\n",
        base = state.base_url
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        banner,
    )
        .into_response()
}
