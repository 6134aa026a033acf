//! ff-filter - dynamic predicate filtering for flight itineraries.
//!
//! This crate provides:
//!
//! - A fixed, ordered catalog of segment predicates addressed by index
//! - Composition of selected predicates with short-circuit AND logic
//! - A [`DynamicFilter`] that keeps flights whose every segment passes
//! - An injectable [`Clock`] so "now" is explicit and testable
//! - Sample flights for demos and tests
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use ff_filter::{DynamicFilter, FixedClock, sample};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let filter = DynamicFilter::with_clock(FixedClock::new(now));
//! let flights = sample::create_flights(now).unwrap();
//!
//! // All three predicates together keep only the plain two-hour flight
//! let kept = filter.filter(&flights, &[0, 1, 2]).unwrap();
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].segments()[0].duration(), Duration::hours(2));
//!
//! // Index 5 does not exist
//! assert!(filter.filter(&flights, &[5]).is_err());
//! ```

pub mod catalog;
pub mod clock;
pub mod composite;
pub mod dynamic;
pub mod sample;
pub mod stats;

pub use catalog::{CATALOG, SegmentPredicate, catalog_size};
pub use clock::{Clock, FixedClock, SystemClock};
pub use composite::CompositePredicate;
pub use dynamic::DynamicFilter;
pub use stats::FilterStats;
