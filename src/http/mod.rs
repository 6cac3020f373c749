//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing, middleware stack)
//!     → handlers.rs (health, metrics page, reset, chirp validation)
//!     → error.rs / response.rs (JSON encoding, error envelopes)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
