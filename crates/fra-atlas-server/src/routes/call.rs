//! The call-trigger proxy endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::AppState;
use crate::call::{CallConfig, CallError};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CallRequest {
    pub phone_number: String,
}

/// `POST /v1/call`
///
/// Forwards the fixed call configuration with the caller's number and
/// relays the upstream outcome: success bodies come back under `data`,
/// upstream error bodies come back under `error` with the upstream
/// status code.
pub async fn trigger(State(state): State<AppState>, Json(req): Json<CallRequest>) -> Response {
    if req.phone_number.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Phone number is required" })),
        )
            .into_response();
    }

    let config = CallConfig::for_number(req.phone_number);
    match state.dispatcher.dispatch(&config).await {
        Ok(data) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": data })),
        )
            .into_response(),
        Err(CallError::Upstream { status, body }) => {
            warn!(status, "call API rejected the request");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(json!({ "success": false, "error": body }))).into_response()
        }
        Err(err) => {
            warn!(error = %err, "call dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
