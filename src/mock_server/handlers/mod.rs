//! HTTP request handlers for the mock server.

pub mod items;
pub mod lists;

pub use items::*;
pub use lists::*;

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::state::MockState;

/// Reject the request with 403 unless it carries the required bearer
/// token. No-op when the state does not require one.
pub(crate) fn ensure_authorized(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    let required = state.required_token.as_deref()?;
    let expected = format!("Bearer {required}");

    let supplied = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if supplied == expected {
        None
    } else {
        Some(
            (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({
                    "error": "Forbidden",
                    "message": "Invalid or missing access token"
                })),
            )
                .into_response(),
        )
    }
}

/// 404 body shared by list and item lookups.
pub(crate) fn not_found(what: &str, id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("{what} not found"),
            "message": format!("No {what} found with id: {id}")
        })),
    )
        .into_response()
}
