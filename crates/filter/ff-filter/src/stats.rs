//! Statistics for filter runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected during a filter run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterStats {
    /// When filtering started
    pub started_at: Option<DateTime<Utc>>,

    /// When filtering completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Total number of flights examined
    pub flights_examined: usize,

    /// Number of flights whose every segment passed
    pub flights_kept: usize,

    /// Number of flights with at least one failing segment
    pub flights_rejected: usize,

    /// Segments actually evaluated (stops at the first failing segment of a flight)
    pub segments_evaluated: usize,
}

impl FilterStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark filtering as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record a flight that passed.
    pub fn record_kept(&mut self, segments_evaluated: usize) {
        self.flights_examined += 1;
        self.flights_kept += 1;
        self.segments_evaluated += segments_evaluated;
    }

    /// Record a flight that was filtered out.
    pub fn record_rejected(&mut self, segments_evaluated: usize) {
        self.flights_examined += 1;
        self.flights_rejected += 1;
        self.segments_evaluated += segments_evaluated;
    }

    /// Get the duration of the filter run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Fraction of examined flights that were kept.
    pub fn keep_ratio(&self) -> Option<f64> {
        if self.flights_examined == 0 {
            None
        } else {
            Some(self.flights_kept as f64 / self.flights_examined as f64)
        }
    }
}
