//! Observability for gridserve
//!
//! Structured one-line JSON logging. Synchronous, unbuffered, with
//! deterministic field ordering so log output is diffable across runs.

mod logger;

pub use logger::{Logger, Severity};
