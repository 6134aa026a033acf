//! Shared utilities for flight-filter CLI binaries.
//!
//! This crate provides the logging setup, log level argument, and text
//! formatting used by the `flight-filter` binary.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_flights, format_percent};
pub use logging::init_logging;
