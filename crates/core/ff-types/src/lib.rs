//! Core types for flight-filter.
//!
//! This crate provides the value types every other crate works with:
//! - [`Segment`] - One non-stop leg with departure and arrival timestamps
//! - [`Flight`] - An ordered, non-empty itinerary of segments
//! - [`parse_timestamp`] - Timestamp parsing shared by flight construction and the CLI

pub mod flight;
pub mod segment;
pub mod timestamp;

pub use flight::*;
pub use segment::*;
pub use timestamp::*;
