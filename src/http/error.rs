//! API error type and its wire representation.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// JSON error payload: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced to API clients.
///
/// Every variant is terminal for its request; none aborts the process or
/// touches other in-flight requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body could not be decoded into the expected shape.
    #[error("Error decoding request: {0}")]
    MalformedPayload(String),

    /// Submitted text exceeds the configured maximum length.
    #[error("Chirp is too long")]
    ChirpTooLong,

    /// A response payload failed to serialize.
    #[error("Error marshaling response: {0}")]
    ResponseEncoding(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Existing clients expect a 500 for undecodable payloads.
            ApiError::MalformedPayload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ChirpTooLong => StatusCode::BAD_REQUEST,
            ApiError::ResponseEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };

        match serde_json::to_vec(&body) {
            Ok(buf) => (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                buf,
            )
                .into_response(),
            // A struct of one string cannot fail to serialize; this arm is
            // terminal either way.
            Err(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to encode error body",
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_wire_contract() {
        assert_eq!(
            ApiError::MalformedPayload("eof".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::ChirpTooLong.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ResponseEncoding("bad".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_carries_the_detail() {
        let err = ApiError::MalformedPayload("unexpected end of input".into());
        assert_eq!(
            err.to_string(),
            "Error decoding request: unexpected end of input"
        );
        assert_eq!(ApiError::ChirpTooLong.to_string(), "Chirp is too long");
    }

    #[test]
    fn error_response_is_json() {
        let response = ApiError::ChirpTooLong.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
