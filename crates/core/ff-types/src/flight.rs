//! Flight itinerary type.

use chrono::{DateTime, FixedOffset, TimeZone};
use ff_error::{FfError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::segment::Segment;
use crate::timestamp::parse_timestamp;

/// A full itinerary: an ordered, non-empty sequence of segments.
///
/// Flights are built once and never mutated. The usual way in is a flat
/// list of timestamps taken pairwise as `(departure, arrival)`.
///
/// # Example
///
/// ```
/// use ff_types::Flight;
///
/// let flight: Flight = "2024-05-01T08:00:00Z,2024-05-01T10:00:00Z,\
///                       2024-05-01T11:00:00Z,2024-05-01T12:30:00Z"
///     .parse()
///     .unwrap();
///
/// assert_eq!(flight.segments().len(), 2);
/// assert_eq!(
///     flight.to_string(),
///     "[2024-05-01T08:00|2024-05-01T10:00] [2024-05-01T11:00|2024-05-01T12:30]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Flight {
    segments: Vec<Segment>,
}

impl Flight {
    /// Create a flight from already-built segments.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(FfError::EmptyFlight);
        }
        Ok(Self { segments })
    }

    /// Create a flight from a flat list of timestamps.
    ///
    /// Timestamps are paired in order: `dates[0]..dates[1]` is the first
    /// segment, `dates[2]..dates[3]` the second, and so on. An odd count
    /// fails with `MalformedFlight`.
    pub fn from_dates<Tz: TimeZone>(dates: &[DateTime<Tz>]) -> Result<Self> {
        check_date_count(dates.len())?;

        let segments = dates
            .chunks_exact(2)
            .map(|pair| Segment::new(pair[0].clone(), pair[1].clone()))
            .collect();

        Self::new(segments)
    }

    /// Parse a flight from a flat list of timestamp strings.
    ///
    /// The count is checked before any timestamp is parsed, so an odd list
    /// reports `MalformedFlight` even if it also holds a bad timestamp.
    pub fn parse<S: AsRef<str>>(dates: &[S]) -> Result<Self> {
        check_date_count(dates.len())?;

        let parsed: Vec<DateTime<FixedOffset>> = dates
            .iter()
            .enumerate()
            .map(|(position, date)| parse_timestamp(date.as_ref(), position))
            .collect::<Result<_>>()?;

        Self::from_dates(&parsed)
    }

    /// The segments, in itinerary order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Departure of the first segment.
    pub fn departure(&self) -> DateTime<FixedOffset> {
        self.segments[0].departure()
    }

    /// Arrival of the last segment.
    pub fn arrival(&self) -> DateTime<FixedOffset> {
        self.segments[self.segments.len() - 1].arrival()
    }
}

fn check_date_count(count: usize) -> Result<()> {
    if count % 2 != 0 {
        return Err(FfError::MalformedFlight { count });
    }
    if count == 0 {
        return Err(FfError::EmptyFlight);
    }
    Ok(())
}

impl FromStr for Flight {
    type Err = FfError;

    /// Parse a comma-separated list of timestamps.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(FfError::EmptyFlight);
        }
        let dates: Vec<&str> = s.split(',').collect();
        Self::parse(&dates)
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
