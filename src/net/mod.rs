//! Network layer.
//!
//! # Data Flow
//! ```text
//! ListenerConfig
//!     → listener.rs (parse address, bind)
//!     → tokio TcpListener handed to axum::serve
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
