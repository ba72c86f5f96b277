//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig::default() (compiled-in benchmark constants)
//!     → validation.rs (semantic checks)
//!     → FixedResponse (serve-ready, immutable)
//!     → shared via Arc with every request
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server starts
//! - All fields have defaults; the binary uses nothing else
//! - Validation separates parsing into serve-ready types from range checks

pub mod schema;
pub mod validation;

pub use schema::FixedResponse;
pub use schema::ListenerConfig;
pub use schema::ResponseConfig;
pub use schema::ServerConfig;
pub use validation::{validate_config, ValidationError};
