//! Route handlers.
//!
//! Handlers answer JSON. Failures use a uniform `{ "success": false,
//! "error": .. }` envelope; list and detail successes return the payload
//! bare, the call and generate endpoints wrap theirs in the envelope.

pub mod assets;
pub mod call;
pub mod claims;
pub mod export;
pub mod recommendations;
pub mod stats;
pub mod villages;

use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

pub(crate) type ApiError = (StatusCode, Json<Value>);

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(json!({ "success": false, "error": message.into() })),
    )
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    error_response(StatusCode::BAD_REQUEST, message)
}

pub(crate) fn not_found(message: impl Into<String>) -> ApiError {
    error_response(StatusCode::NOT_FOUND, message)
}

pub(crate) fn internal_error(message: impl Into<String>) -> ApiError {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Split a comma-separated query value into a set, e.g.
/// `status=pending,granted`. Empty segments are skipped, unknown values
/// are an error for the caller to surface as 400.
pub(crate) fn parse_csv_set<T, F>(raw: Option<&str>, parse: F, what: &str) -> Result<Vec<T>, String>
where
    F: Fn(&str) -> Option<T>,
{
    let mut out = Vec::new();
    if let Some(raw) = raw {
        for segment in raw.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            match parse(segment) {
                Some(value) => out.push(value),
                None => return Err(format!("unknown {what}: {segment}")),
            }
        }
    }
    Ok(out)
}
