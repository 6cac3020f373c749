//! Shared utilities for endpoint integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use chirpd::config::ServiceConfig;
use chirpd::http::HttpServer;
use chirpd::lifecycle::Shutdown;

/// Start the service on an ephemeral port.
///
/// Returns the bound address and the shutdown handle that stops the server.
/// The listener is bound before the server task is spawned, so clients can
/// connect immediately; early connections wait in the accept backlog.
pub async fn spawn_service(config: ServiceConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_rx).await;
    });

    (addr, shutdown)
}

/// HTTP client that ignores any ambient proxy environment variables.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
