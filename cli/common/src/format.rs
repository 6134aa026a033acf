//! Formatting utilities for CLI output.

use ff_types::Flight;

/// Render flights one per line using their display form.
///
/// An empty list renders as an empty string.
pub fn format_flights(flights: &[Flight]) -> String {
    flights
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a ratio in `0.0..=1.0` as a percentage.
///
/// # Examples
///
/// ```
/// use ff_cli_common::format_percent;
///
/// assert_eq!(format_percent(0.0), "0.0%");
/// assert_eq!(format_percent(1.0 / 6.0), "16.7%");
/// assert_eq!(format_percent(1.0), "100.0%");
/// ```
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
