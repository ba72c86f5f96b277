//! Configuration schema definitions.
//!
//! The server binary runs on these defaults and exposes no knobs. The types are
//! public so tests and embedders can bind an ephemeral port or shorten the
//! simulated latency.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;

use crate::config::validation::ValidationError;

/// Default listen address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default simulated backend latency.
pub const DEFAULT_DELAY_MS: u64 = 50;

/// Default response status (201 Created).
pub const DEFAULT_STATUS: u16 = 201;

/// Default response body.
pub const DEFAULT_BODY: &str = r#"{"id":"123"}"#;

/// Root configuration for the responder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// What every request gets back, and after how long.
    pub response: ResponseConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Fixed response settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseConfig {
    /// Delay before the response is written, in milliseconds.
    pub delay_ms: u64,

    /// Status code sent for every request.
    pub status: u16,

    /// Body sent for every request, verbatim.
    pub body: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            status: DEFAULT_STATUS,
            body: DEFAULT_BODY.to_string(),
        }
    }
}

/// Serve-ready form of [`ResponseConfig`].
///
/// Built once at startup and shared by every request, so the handler never
/// parses or allocates per request.
#[derive(Debug, Clone)]
pub struct FixedResponse {
    pub delay: Duration,
    pub status: StatusCode,
    pub body: Bytes,
}

impl TryFrom<&ResponseConfig> for FixedResponse {
    type Error = ValidationError;

    fn try_from(config: &ResponseConfig) -> Result<Self, Self::Error> {
        let status = StatusCode::from_u16(config.status)
            .map_err(|_| ValidationError::InvalidStatus(config.status))?;

        Ok(Self {
            delay: Duration::from_millis(config.delay_ms),
            status,
            body: Bytes::from(config.body.clone()),
        })
    }
}

impl Default for FixedResponse {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            status: StatusCode::CREATED,
            body: Bytes::from_static(DEFAULT_BODY.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_benchmark_target() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.response.delay_ms, 50);
        assert_eq!(config.response.status, 201);
        assert_eq!(config.response.body, r#"{"id":"123"}"#);
    }

    #[test]
    fn test_fixed_response_from_default_config() {
        let fixed = FixedResponse::try_from(&ResponseConfig::default()).unwrap();
        let default = FixedResponse::default();

        assert_eq!(fixed.delay, default.delay);
        assert_eq!(fixed.status, StatusCode::CREATED);
        assert_eq!(fixed.body, default.body);
    }

    #[test]
    fn test_fixed_response_rejects_bad_status() {
        let config = ResponseConfig {
            status: 42,
            ..ResponseConfig::default()
        };
        let err = FixedResponse::try_from(&config).unwrap_err();
        assert_eq!(err, ValidationError::InvalidStatus(42));
    }
}
