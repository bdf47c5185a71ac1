//! # Observability
//!
//! Structured logging for the calculation service.

pub mod logger;

pub use logger::{Logger, Severity};
