//! Output of filter results.

use anyhow::{Context, Result};
use ff_cli_common::format_flights;
use ff_filter::SegmentPredicate;
use ff_types::Flight;
use serde::Serialize;
use std::io::Write;

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable sections (default)
    #[default]
    Text,

    /// JSON Lines - one JSON object per section
    Jsonl,
}

/// One titled block of results.
#[derive(Debug, Serialize)]
pub struct Section<'a> {
    /// Section heading
    pub title: &'a str,

    /// Predicates that produced this section (empty for the unfiltered list)
    pub predicates: &'a [SegmentPredicate],

    /// Flights in the section
    pub flights: &'a [Flight],
}

/// A catalog entry as listed by `--list-predicates`.
#[derive(Debug, Serialize)]
struct CatalogEntry {
    index: usize,
    name: &'static str,
    description: &'static str,
}

/// Writes sections and catalog listings to a writer.
pub struct FlightOutput<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> FlightOutput<W> {
    /// Create an output with the specified format.
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write one section.
    pub fn section(&mut self, section: &Section<'_>) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer, "{}:", section.title)?;
                if !section.flights.is_empty() {
                    writeln!(self.writer, "{}", format_flights(section.flights))?;
                }
                writeln!(self.writer)?;
            }
            OutputFormat::Jsonl => {
                let line = serde_json::to_string(section).context("JSON serialization failed")?;
                writeln!(self.writer, "{line}")?;
            }
        }
        Ok(())
    }

    /// Write the predicate catalog.
    pub fn catalog(&mut self, predicates: &[SegmentPredicate]) -> Result<()> {
        for predicate in predicates {
            match self.format {
                OutputFormat::Text => writeln!(
                    self.writer,
                    "{}  {:<26}{}",
                    predicate.index(),
                    predicate.name(),
                    predicate.description()
                )?,
                OutputFormat::Jsonl => {
                    let entry = CatalogEntry {
                        index: predicate.index(),
                        name: predicate.name(),
                        description: predicate.description(),
                    };
                    let line =
                        serde_json::to_string(&entry).context("JSON serialization failed")?;
                    writeln!(self.writer, "{line}")?;
                }
            }
        }
        Ok(())
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output")
    }
}
