//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Mount the static site under `/app` with hit tracking
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Bind the server to a listener and drive it to completion
//!
//! # Data Flow
//! ```text
//! Request -> request ID -> trace -> body limit -> timeout -> Router
//!                                                              |
//!                        /app/* -> hit counter -> static files |
//!                        /api/*, /admin/* -> handlers ---------+
//! ```

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, routing::post, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::schema::ServiceConfig;
use crate::http::handlers;
use crate::metrics::middleware::track_hits;
use crate::metrics::HitCounter;
use crate::moderation::Sanitizer;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Counter for page loads under `/app`.
    pub hits: Arc<HitCounter>,
    /// Banned-word masker for chirp validation.
    pub sanitizer: Arc<Sanitizer>,
    /// Maximum accepted chirp length in bytes.
    pub max_chirp_len: usize,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            hits: Arc::new(HitCounter::new()),
            sanitizer: Arc::new(Sanitizer::new(
                config.moderation.banned_words.iter().map(String::as_str),
            )),
            max_chirp_len: config.moderation.max_length,
        }
    }
}

/// HTTP server for the chirp service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState::new(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        // `nest_service` strips the `/app` prefix before the file lookup, so
        // `/app/index.html` reads `<site.root>/index.html` from disk.
        let site = Router::new()
            .nest_service("/app", ServeDir::new(&config.site.root))
            .layer(middleware::from_fn_with_state(state.clone(), track_hits));

        let mut router = Router::new()
            .route("/api/healthz", get(handlers::healthz))
            .route("/api/validate_chirp", post(handlers::validate_chirp))
            .route("/admin/metrics", get(handlers::admin_metrics))
            .route("/admin/reset", post(handlers::reset_metrics))
            .merge(site);

        if config.compat.legacy_routes {
            router = router
                .route("/healthz", get(handlers::healthz))
                .route("/metrics", get(handlers::metrics_text))
                .route("/reset", post(handlers::reset_metrics));
        }

        // First layer listed is outermost: the request ID must exist before
        // the trace span captures it. The timeout sits innermost, directly
        // over the routes; it needs the plain route body, so the body cap
        // stays outside it.
        router.with_state(state).layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.timeouts.request_secs,
                ))),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            site_root = %self.config.site.root,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
