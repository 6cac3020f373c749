//! Request handlers for the service endpoints.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::response::json_response;
use crate::http::server::AppState;

/// Inbound validation payload.
#[derive(Debug, Deserialize)]
pub struct ValidationRequest {
    /// Absent fields decode to an empty chirp rather than an error.
    #[serde(default)]
    pub body: String,
}

/// Successful validation payload.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub cleaned_body: String,
}

/// Health probe. Fixed response regardless of request content.
pub async fn healthz() -> &'static str {
    "OK"
}

/// Admin metrics page embedding the current hit count.
pub async fn admin_metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.hits.load();
    Html(format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>"#
    ))
}

/// Legacy plain-text metrics report.
pub async fn metrics_text(State(state): State<AppState>) -> String {
    format!("Hits: {}", state.hits.load())
}

/// Zero the hit counter. Idempotent; the previous value is only logged.
pub async fn reset_metrics(State(state): State<AppState>) -> StatusCode {
    let previous = state.hits.reset();
    tracing::info!(previous, "Hit counter reset");
    StatusCode::OK
}

/// Validate and clean a submitted chirp.
///
/// Three steps: decode the payload, enforce the length limit, then mask
/// banned words. Each failure is terminal and answered with the JSON error
/// shape.
pub async fn validate_chirp(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> Response {
    let bytes = match payload {
        Ok(bytes) => bytes,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Failed to read chirp body");
            return ApiError::MalformedPayload(rejection.body_text()).into_response();
        }
    };

    // Decoded from raw bytes; clients are not required to send a JSON
    // content type.
    let request: ValidationRequest = match serde_json::from_slice(&bytes) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(reason = %err, "Rejected undecodable chirp");
            return ApiError::MalformedPayload(err.to_string()).into_response();
        }
    };

    // Byte length, matching how the limit has always been enforced.
    if request.body.len() > state.max_chirp_len {
        tracing::debug!(len = request.body.len(), "Rejected oversized chirp");
        return ApiError::ChirpTooLong.into_response();
    }

    let cleaned_body = state.sanitizer.sanitize(&request.body);
    json_response(StatusCode::OK, &ValidationResponse { cleaned_body })
}
