//! CLI argument definitions for flight-filter.

use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
pub use ff_cli_common::LogLevel;

/// Filter flight itineraries by composable segment predicates.
///
/// Every selected predicate must hold for every segment of a flight for the
/// flight to be kept. Without --filter, prints the sample flights, the
/// result of each predicate on its own, and all predicates combined.
///
/// ## Examples
///
/// Demo over the built-in sample flights:
///   flight-filter
///
/// Only flights that depart in the future with short legs:
///   flight-filter -f 0 -f 2
///
/// Filter your own flights against a pinned clock:
///   flight-filter --now 2024-06-01T12:00:00Z -f 0,1,2 \
///       --flight 2024-06-02T08:00:00Z,2024-06-02T10:00:00Z
#[derive(Parser, Debug)]
#[command(name = "flight-filter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Selection ===
    /// Predicate index to apply (repeatable or comma-separated)
    ///
    /// See --list-predicates for the catalog.
    #[arg(long = "filter", short = 'f', value_delimiter = ',')]
    pub filters: Vec<usize>,

    /// Print the predicate catalog and exit
    #[arg(long)]
    pub list_predicates: bool,

    // === Input ===
    /// Flight as comma-separated timestamps, taken pairwise as departure/arrival
    ///
    /// Can be specified multiple times. Replaces the sample flights.
    #[arg(long = "flight")]
    pub flights: Vec<String>,

    /// Reference time for "now" (RFC 3339); defaults to the wall clock
    #[arg(long, env = "FF_NOW", value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,

    // === Output ===
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormatArg,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, env = "FF_LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One flight per line as `[dep|arr] [dep|arr]`
    Text,
    /// JSON Lines (one JSON object per section)
    Jsonl,
}

impl From<OutputFormatArg> for crate::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => crate::output::OutputFormat::Text,
            OutputFormatArg::Jsonl => crate::output::OutputFormat::Jsonl,
        }
    }
}

/// Parse the --now reference time.
fn parse_now(s: &str) -> Result<DateTime<Utc>, String> {
    ff_types::parse_utc(s).map_err(|e| e.to_string())
}
