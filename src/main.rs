//! Fixed-Latency Responder
//!
//! A benchmarking target: every request, on any path with any method, waits
//! 50ms and then gets `201 Created` with the body `{"id":"123"}`.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ net::listener ─▶ http::server (axum)    │
//!                             │                        │                   │
//!                             │                        ▼                   │
//!     Client Response         │                 http::responder           │
//!     ◀───────────────────────┼──────────────── sleep(delay), fixed reply │
//!                             └────────────────────────────────────────────┘
//! ```
//!
//! There are no flags and no config file. The only failure the process
//! distinguishes is being unable to bind :8080, which is fatal.

use fixed_latency_server::config::ServerConfig;
use fixed_latency_server::lifecycle;
use fixed_latency_server::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("fixed-latency-server v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServerConfig::default();

    if let Err(e) = lifecycle::start(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    Ok(())
}
