//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Build the serve-ready response
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{validate_config, FixedResponse, ServerConfig, ValidationError};
use crate::http::{HttpServer, ServerError};
use crate::net::{self, ListenerError};

/// Anything that stops the responder from starting or keeps it from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate, then bind. Returns the server and its listener without serving.
pub async fn prepare(config: &ServerConfig) -> Result<(HttpServer, TcpListener), StartupError> {
    validate_config(config).map_err(StartupError::InvalidConfig)?;

    let response = FixedResponse::try_from(&config.response)
        .map_err(|e| StartupError::InvalidConfig(vec![e]))?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        delay_ms = config.response.delay_ms,
        status = config.response.status,
        body_len = config.response.body.len(),
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;
    Ok((HttpServer::new(response), listener))
}

/// Start the responder and serve until the process is terminated.
pub async fn start(config: ServerConfig) -> Result<(), StartupError> {
    let (server, listener) = prepare(&config).await?;
    server.run(listener).await?;
    Ok(())
}
