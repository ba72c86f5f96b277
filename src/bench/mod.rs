//! Load generator for driving the responder.
//!
//! # Data Flow
//! ```text
//! LoadPlan
//!     → runner.rs (C worker tasks, one shared reqwest::Client)
//!     → per-request samples (latency, status or transport error)
//!     → report.rs (percentiles, status histogram)
//! ```
//!
//! # Design Decisions
//! - Workers claim request slots from one atomic counter, so exactly
//!   `requests` requests go out however they are split
//! - Transport errors are counted, never retried

pub mod report;
pub mod runner;

pub use report::{LoadReport, Sample};
pub use runner::{run, BenchError, LoadPlan};
