//! Main execution logic for flight-filter CLI.

use anyhow::{Context, Result};
use ff_error::{ErrorCategory, FfError, classify_error};
use ff_filter::{CATALOG, Clock, DynamicFilter, FilterStats, FixedClock, SystemClock, sample};
use ff_types::Flight;
use std::io::Write;
use tracing::{debug, info};

use crate::args::Cli;
use crate::output::{FlightOutput, Section};

/// Results of one filtered section, for the run summary.
#[derive(Debug, Clone)]
pub struct SectionSummary {
    /// Section heading
    pub title: String,

    /// Filter statistics for the section
    pub stats: FilterStats,
}

/// Everything the run did, reported on stderr by `main`.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Flights fed into the filters
    pub flights_input: usize,

    /// One entry per filtered section
    pub sections: Vec<SectionSummary>,
}

/// Execute flight-filter with the provided arguments, writing results to `out`.
pub fn execute<W: Write>(args: &Cli, out: W) -> Result<RunSummary> {
    match args.now {
        Some(now) => run_with_clock(args, FixedClock::new(now), out),
        None => run_with_clock(args, SystemClock, out),
    }
}

/// Map an error onto a process exit code.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<FfError>() {
        Some(e) => classify_error(e).exit_code(),
        None => ErrorCategory::Internal.exit_code(),
    }
}

/// Reject option combinations that would be silently ignored.
fn check_options(args: &Cli) -> Result<(), FfError> {
    if args.list_predicates && (!args.filters.is_empty() || !args.flights.is_empty()) {
        return Err(FfError::Config(
            "--list-predicates cannot be combined with --filter or --flight".to_string(),
        ));
    }
    Ok(())
}

/// Run with a specific time source.
fn run_with_clock<C: Clock, W: Write>(args: &Cli, clock: C, out: W) -> Result<RunSummary> {
    check_options(args)?;
    let mut output = FlightOutput::new(out, args.output_format.into());

    if args.list_predicates {
        output.catalog(&CATALOG)?;
        output.flush()?;
        return Ok(RunSummary::default());
    }

    let filter = DynamicFilter::with_clock(clock);
    let flights = load_flights(args, filter.clock())?;
    info!(flights = flights.len(), "Flights loaded");

    let mut summary = RunSummary {
        flights_input: flights.len(),
        sections: Vec::new(),
    };

    if args.filters.is_empty() {
        output.section(&Section {
            title: "All flights",
            predicates: &[],
            flights: &flights,
        })?;

        for predicate in CATALOG {
            let title = format!("{} ({})", predicate.name(), predicate.index());
            let section = run_section(
                &filter,
                &flights,
                &[predicate.index()],
                title,
                &mut output,
            )?;
            summary.sections.push(section);
        }

        let all: Vec<usize> = CATALOG.iter().map(|p| p.index()).collect();
        let section = run_section(&filter, &flights, &all, "All filters".into(), &mut output)?;
        summary.sections.push(section);
    } else {
        let section = run_section(
            &filter,
            &flights,
            &args.filters,
            String::new(),
            &mut output,
        )?;
        summary.sections.push(section);
    }

    output.flush()?;
    Ok(summary)
}

/// Filter once and write the section.
///
/// An empty `title` is replaced by the composite's description.
fn run_section<C: Clock, W: Write>(
    filter: &DynamicFilter<C>,
    flights: &[Flight],
    indices: &[usize],
    title: String,
    output: &mut FlightOutput<W>,
) -> Result<SectionSummary> {
    let composite = filter.compose(indices)?;
    let (kept, stats) = filter.apply(flights, &composite);

    let title = if title.is_empty() {
        composite.description()
    } else {
        title
    };

    output.section(&Section {
        title: &title,
        predicates: composite.predicates(),
        flights: &kept,
    })?;

    Ok(SectionSummary { title, stats })
}

/// Parse --flight arguments, or fall back to the sample flights.
fn load_flights<C: Clock>(args: &Cli, clock: &C) -> Result<Vec<Flight>> {
    if args.flights.is_empty() {
        debug!("No --flight given, using sample flights");
        return Ok(sample::create_flights(clock.now())?);
    }

    args.flights
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            raw.parse::<Flight>()
                .with_context(|| format!("Invalid --flight #{}: '{raw}'", i + 1))
        })
        .collect()
}
