//! flight-filter CLI
//!
//! Filters flight itineraries by composable segment predicates.

use clap::Parser;
use ff_cli_common::{format_percent, init_logging};

mod args;
mod output;
mod run;

use args::Cli;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for results)
    init_logging(args.log_level)?;

    let summary = match run::execute(&args, std::io::stdout().lock()) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(run::exit_code(&e));
        }
    };

    if summary.sections.is_empty() {
        return Ok(());
    }

    // Report results to stderr
    eprintln!("Filtering completed:");
    eprintln!("  Flights in: {}", summary.flights_input);
    for section in &summary.sections {
        let stats = &section.stats;
        let ratio = stats
            .keep_ratio()
            .map(|r| format!(" ({})", format_percent(r)))
            .unwrap_or_default();
        eprintln!(
            "  {}: kept {} of {}{}, {} segments checked",
            section.title,
            stats.flights_kept,
            stats.flights_examined,
            ratio,
            stats.segments_evaluated
        );
    }

    Ok(())
}
