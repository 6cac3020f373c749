//! Hit-tracking middleware for the static-file path.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

/// Count a request, then delegate to the wrapped handler.
///
/// The increment happens before delegation and is unconditional: the counter
/// moves even when the wrapped handler fails or returns a non-2xx status.
pub async fn track_hits(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    state.hits.increment();
    next.run(request).await
}
