//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all responder route
//! - Wire up middleware (request ID, tracing)
//! - Serve on a bound listener until the process is killed

use std::sync::Arc;

use axum::{body::Body, http::Request, routing::any, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::FixedResponse;
use crate::http::request::{request_id, request_id_layer};
use crate::http::responder::respond;

/// Error returned once the server stops serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the fixed-latency responder.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server answering every request with `response`.
    pub fn new(response: FixedResponse) -> Self {
        let router = Self::build_router(Arc::new(response));
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(response: Arc<FixedResponse>) -> Router {
        Router::new()
            .route("/", any(respond))
            .route("/{*path}", any(respond))
            .with_state(response)
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request),
                )
            }))
            .layer(request_id_layer())
    }

    /// The router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Only returns if accepting fails; there is no shutdown hook.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
