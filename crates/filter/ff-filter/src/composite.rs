//! Composite predicate for combining catalog entries.
//!
//! Combines selected predicates with AND logic against one reference time.

use chrono::{DateTime, Utc};
use ff_error::{FfError, Result};
use ff_types::{Flight, Segment};

use crate::catalog::SegmentPredicate;

/// The logical AND of a non-empty selection of catalog predicates.
///
/// A segment passes only if it passes ALL selected predicates, evaluated
/// left to right with short-circuiting. The reference time is fixed when
/// the composite is built.
///
/// # Example
///
/// ```
/// use chrono::{Duration, Utc};
/// use ff_filter::{CompositePredicate, SegmentPredicate};
/// use ff_types::Segment;
///
/// let now = Utc::now();
/// let composite = CompositePredicate::new(
///     vec![SegmentPredicate::FutureDeparture, SegmentPredicate::ShortWindow],
///     now,
/// )
/// .unwrap();
///
/// let soon = now + Duration::days(1);
/// assert!(composite.matches(&Segment::new(soon, soon + Duration::hours(2))));
/// assert!(!composite.matches(&Segment::new(soon, soon + Duration::hours(5)))); // Too long
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositePredicate {
    predicates: Vec<SegmentPredicate>,
    now: DateTime<Utc>,
}

impl CompositePredicate {
    /// Create a composite from a non-empty selection.
    ///
    /// Duplicates are kept; they do not change the result.
    pub fn new(predicates: Vec<SegmentPredicate>, now: DateTime<Utc>) -> Result<Self> {
        if predicates.is_empty() {
            return Err(FfError::EmptySelection);
        }
        Ok(Self { predicates, now })
    }

    /// Create a composite from catalog indices.
    ///
    /// Every index is resolved before anything is evaluated.
    pub fn from_indices(indices: &[usize], now: DateTime<Utc>) -> Result<Self> {
        Self::new(SegmentPredicate::from_indices(indices)?, now)
    }

    /// Check a single segment.
    pub fn matches(&self, segment: &Segment) -> bool {
        self.predicates
            .iter()
            .all(|p| p.evaluate(segment, self.now))
    }

    /// Check that every segment of a flight passes.
    pub fn matches_flight(&self, flight: &Flight) -> bool {
        self.check_flight(flight).0
    }

    /// Check a flight, also returning how many segments were evaluated.
    ///
    /// Stops at the first failing segment.
    pub fn check_flight(&self, flight: &Flight) -> (bool, usize) {
        let mut evaluated = 0;
        let passed = flight.segments().iter().all(|segment| {
            evaluated += 1;
            self.matches(segment)
        });
        (passed, evaluated)
    }

    /// The selected predicates, in evaluation order.
    pub fn predicates(&self) -> &[SegmentPredicate] {
        &self.predicates
    }

    /// The reference time used by time-dependent predicates.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Number of predicates in the composite.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Always false; a composite cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Get a human-readable description.
    pub fn description(&self) -> String {
        let names: Vec<&str> = self.predicates.iter().map(|p| p.name()).collect();
        format!("composite({})", names.join(" AND "))
    }
}
