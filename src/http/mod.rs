//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route)
//!     → request.rs (add request ID for the trace span)
//!     → responder.rs (sleep, then the fixed status and body)
//!     → Send to client
//! ```

pub mod request;
pub mod responder;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{HttpServer, ServerError};
