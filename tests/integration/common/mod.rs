//! Shared fixtures for flight-filter integration tests.
//!
//! A pinned clock, a generated grid of flights, and helpers for
//! enumerating predicate selections.

pub mod fixtures;

pub use fixtures::{fixed_filter, flight_grid, index_subsets, is_subsequence, reference_now};
