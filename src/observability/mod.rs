//! Observability subsystem.
//!
//! Structured log events only. Each request runs inside a span carrying its
//! method, path and request ID.

pub mod logging;
