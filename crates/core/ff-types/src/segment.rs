//! Flight segment type.

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};
use ff_error::Result;
use serde::Serialize;
use std::fmt;

use crate::timestamp::{DISPLAY_FORMAT, parse_timestamp};

/// One non-stop leg of a flight.
///
/// Both timestamps keep the offset they were created with. Nothing forces
/// `departure < arrival`; that is one of the conditions a filter may check,
/// not a structural guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Segment {
    /// When the leg departs
    departure: DateTime<FixedOffset>,

    /// When the leg arrives
    arrival: DateTime<FixedOffset>,
}

impl Segment {
    /// Create a segment from two timestamps in any time zone.
    pub fn new<Tz: TimeZone>(departure: DateTime<Tz>, arrival: DateTime<Tz>) -> Self {
        Self {
            departure: departure.fixed_offset(),
            arrival: arrival.fixed_offset(),
        }
    }

    /// Parse a segment from departure and arrival strings.
    ///
    /// Blank input fails with `MissingTimestamp`, unparseable input with
    /// `InvalidTimestamp`.
    pub fn parse(departure: &str, arrival: &str) -> Result<Self> {
        Ok(Self {
            departure: parse_timestamp(departure, 0)?,
            arrival: parse_timestamp(arrival, 1)?,
        })
    }

    /// Departure timestamp.
    pub fn departure(&self) -> DateTime<FixedOffset> {
        self.departure
    }

    /// Arrival timestamp.
    pub fn arrival(&self) -> DateTime<FixedOffset> {
        self.arrival
    }

    /// Signed time between departure and arrival.
    ///
    /// Negative when the segment departs after it arrives.
    pub fn duration(&self) -> TimeDelta {
        self.arrival.signed_duration_since(self.departure)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}|{}]",
            self.departure.format(DISPLAY_FORMAT),
            self.arrival.format(DISPLAY_FORMAT)
        )
    }
}
