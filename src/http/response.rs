//! JSON response construction.
//!
//! # Responsibilities
//! - Serialize success payloads with an explicit JSON content type
//! - Surface serialization failures as the error payload, never a panic
//!
//! # Design Decisions
//! - Encoding failures degrade to the same `{"error": ...}` shape clients
//!   already handle, with a server-error status

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::error::ApiError;

/// Build an `application/json` response from a serializable payload.
///
/// On serialization failure the client receives the standard error payload
/// with a 500 instead of the requested status.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => ApiError::ResponseEncoding(err.to_string()).into_response(),
    }
}
