//! Configuration validation.
//!
//! # Responsibilities
//! - Check the bind address parses as a socket address
//! - Check the status code is one `http` accepts
//! - Keep the simulated delay within a sane ceiling
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Longest delay accepted (one hour).
pub const MAX_DELAY_MS: u64 = 60 * 60 * 1000;

/// A single semantic problem in a [`ServerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("invalid status code {0} (expected 100..=999)")]
    InvalidStatus(u16),

    #[error("delay of {0}ms exceeds the {MAX_DELAY_MS}ms ceiling")]
    DelayTooLong(u64),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if StatusCode::from_u16(config.response.status).is_err() {
        errors.push(ValidationError::InvalidStatus(config.response.status));
    }

    if config.response.delay_ms > MAX_DELAY_MS {
        errors.push(ValidationError::DelayTooLong(config.response.delay_ms));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
