//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Validate → Bind listener → Serve
//! ```
//!
//! There is no shutdown path: the process serves until it is killed.

pub mod startup;

pub use startup::{prepare, start, StartupError};
