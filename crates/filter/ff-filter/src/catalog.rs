//! The fixed catalog of segment predicates.
//!
//! Each entry is addressed by a stable ordinal. The ordinal is the public
//! identity, so entries must never be reordered.

use chrono::{DateTime, Utc};
use ff_error::{FfError, Result};
use ff_types::Segment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named boolean test over a single [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentPredicate {
    /// Departure is strictly after "now".
    FutureDeparture = 0,

    /// Departure is strictly before arrival.
    DepartureBeforeArrival = 1,

    /// Duration truncated to whole hours is in `1..=2`.
    ///
    /// Truncation means a 2h59m segment passes and a 59m segment fails.
    ShortWindow = 2,
}

/// The catalog in index order.
pub const CATALOG: [SegmentPredicate; 3] = [
    SegmentPredicate::FutureDeparture,
    SegmentPredicate::DepartureBeforeArrival,
    SegmentPredicate::ShortWindow,
];

/// Number of entries in the catalog.
pub const fn catalog_size() -> usize {
    CATALOG.len()
}

/// Look up a catalog entry by index.
pub fn get(index: usize) -> Result<SegmentPredicate> {
    SegmentPredicate::from_index(index)
}

impl SegmentPredicate {
    /// Resolve a catalog index.
    ///
    /// Fails with `InvalidIndex` outside `0..catalog_size()`.
    pub fn from_index(index: usize) -> Result<Self> {
        CATALOG.get(index).copied().ok_or(FfError::InvalidIndex {
            index,
            catalog_size: catalog_size(),
        })
    }

    /// Resolve a list of catalog indices, failing on the first bad one.
    pub fn from_indices(indices: &[usize]) -> Result<Vec<Self>> {
        indices.iter().map(|&i| Self::from_index(i)).collect()
    }

    /// Catalog index of this predicate.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable machine name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FutureDeparture => "future_departure",
            Self::DepartureBeforeArrival => "departure_before_arrival",
            Self::ShortWindow => "short_window",
        }
    }

    /// One-line human description.
    pub fn description(self) -> &'static str {
        match self {
            Self::FutureDeparture => "segment departs after the current time",
            Self::DepartureBeforeArrival => "segment departs before it arrives",
            Self::ShortWindow => "segment lasts more than 0 and at most 2 whole hours",
        }
    }

    /// Evaluate this predicate against a segment.
    ///
    /// `now` is only read by [`SegmentPredicate::FutureDeparture`].
    pub fn evaluate(self, segment: &Segment, now: DateTime<Utc>) -> bool {
        match self {
            Self::FutureDeparture => segment.departure().with_timezone(&Utc) > now,
            Self::DepartureBeforeArrival => segment.departure() < segment.arrival(),
            Self::ShortWindow => (1..=2).contains(&segment.duration().num_hours()),
        }
    }
}

impl fmt::Display for SegmentPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
