//! Timestamp parsing.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use ff_error::{FfError, Result};

/// Display format for segment timestamps (`yyyy-MM-ddTHH:mm`).
pub const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a timestamp string, keeping its offset.
///
/// Supported formats:
/// - RFC 3339: `2024-01-15T10:30:00+02:00`, `2024-01-15T10:30:00Z`
/// - Minute precision without offset: `2024-01-15T10:30` (assumes UTC)
///
/// `position` is only used to label a blank input in the error.
pub fn parse_timestamp(input: &str, position: usize) -> Result<DateTime<FixedOffset>> {
    let input = input.trim();

    if input.is_empty() {
        return Err(FfError::MissingTimestamp { position });
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }

    match NaiveDateTime::parse_from_str(input, DISPLAY_FORMAT) {
        Ok(naive) => Ok(naive.and_utc().fixed_offset()),
        Err(e) => Err(FfError::InvalidTimestamp {
            value: input.to_string(),
            reason: format!(
                "{e}; expected RFC 3339 (2024-01-15T10:30:00+02:00) or 2024-01-15T10:30"
            ),
        }),
    }
}

/// Parse a timestamp and normalise it to UTC.
pub fn parse_utc(input: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(input, 0).map(|dt| dt.with_timezone(&Utc))
}
