//! Chirpd Service Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod metrics;
pub mod moderation;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
