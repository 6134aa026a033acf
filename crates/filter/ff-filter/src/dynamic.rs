//! Dynamic flight filtering.
//!
//! The [`DynamicFilter`] resolves a caller-chosen selection of catalog
//! predicates, composes them, and keeps the flights whose every segment
//! satisfies the composite.

use ff_error::Result;
use ff_types::Flight;
use tracing::{debug, trace};

use crate::catalog::SegmentPredicate;
use crate::clock::{Clock, SystemClock};
use crate::composite::CompositePredicate;
use crate::stats::FilterStats;

/// Filters flights by a dynamic selection of segment predicates.
///
/// Stateless apart from its clock. Each call reads the clock once, builds a
/// [`CompositePredicate`], and returns a new vector with the passing
/// flights in input order. The input is never modified.
#[derive(Debug, Clone, Default)]
pub struct DynamicFilter<C: Clock = SystemClock> {
    clock: C,
}

impl DynamicFilter<SystemClock> {
    /// Create a filter that reads the wall clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> DynamicFilter<C> {
    /// Create a filter with an explicit time source.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Resolve catalog indices into a composite at the current time.
    ///
    /// Fails with `EmptySelection` or `InvalidIndex`.
    pub fn compose(&self, indices: &[usize]) -> Result<CompositePredicate> {
        CompositePredicate::from_indices(indices, self.clock.now())
    }

    /// Keep the flights whose every segment passes all indexed predicates.
    pub fn filter(&self, flights: &[Flight], indices: &[usize]) -> Result<Vec<Flight>> {
        let composite = self.compose(indices)?;
        Ok(self.apply(flights, &composite).0)
    }

    /// Keep the flights whose every segment passes all given predicates.
    pub fn filter_by(
        &self,
        flights: &[Flight],
        predicates: &[SegmentPredicate],
    ) -> Result<Vec<Flight>> {
        let composite = CompositePredicate::new(predicates.to_vec(), self.clock.now())?;
        Ok(self.apply(flights, &composite).0)
    }

    /// Like [`DynamicFilter::filter`], also returning run statistics.
    pub fn filter_with_stats(
        &self,
        flights: &[Flight],
        indices: &[usize],
    ) -> Result<(Vec<Flight>, FilterStats)> {
        let composite = self.compose(indices)?;
        Ok(self.apply(flights, &composite))
    }

    /// Apply an already-built composite.
    pub fn apply(
        &self,
        flights: &[Flight],
        composite: &CompositePredicate,
    ) -> (Vec<Flight>, FilterStats) {
        let mut stats = FilterStats::new();
        let mut kept = Vec::new();

        for (position, flight) in flights.iter().enumerate() {
            let (passed, evaluated) = composite.check_flight(flight);

            if passed {
                stats.record_kept(evaluated);
                kept.push(flight.clone());
            } else {
                trace!(position, flight = %flight, "Flight rejected");
                stats.record_rejected(evaluated);
            }
        }

        stats.complete();
        debug!(
            filter = %composite.description(),
            now = %composite.now(),
            examined = stats.flights_examined,
            kept = stats.flights_kept,
            rejected = stats.flights_rejected,
            segments = stats.segments_evaluated,
            "Filter applied"
        );

        (kept, stats)
    }
}
