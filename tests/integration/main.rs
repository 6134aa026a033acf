//! Integration tests for flight-filter.
//!
//! These exercise the public API of `ff-types` and `ff-filter` together:
//! algebraic properties of the dynamic filter over a generated flight grid,
//! and the sample-flight scenario. Shared fixtures live in the crate's
//! library (`common/`).
//!
//! ## Running Integration Tests
//!
//! ```bash
//! cargo test -p integration-tests
//! ```

mod properties_test;
mod scenario_test;
