//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use fixed_latency_server::config::ServerConfig;
use fixed_latency_server::lifecycle;

/// Start a responder on an ephemeral loopback port with the given delay.
///
/// The server task lives until the test runtime shuts down.
pub async fn start_responder(delay: Duration) -> SocketAddr {
    let mut config = ServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.response.delay_ms = delay.as_millis() as u64;

    let (server, listener) = lifecycle::prepare(&config).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Start a responder with the default 50ms delay.
#[allow(dead_code)]
pub async fn start_default_responder() -> SocketAddr {
    start_responder(Duration::from_millis(50)).await
}

/// HTTP client that talks to the responder directly, ignoring proxy env vars.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
