mod batch;
mod domain;
mod error;
mod formulas;
mod packages;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use crate::batch::{BatchOutcome, failure_message, process_batch};
use crate::packages::{demo_packages, load_packages};

/// Workout statistics calculator for running, walking and swimming sensor data.
#[derive(Parser, Debug)]
#[command(name = "workout-stats")]
#[command(about = "Converts raw workout sensor packages into distance, speed and calorie reports")]
#[command(version)]
struct Args {
    /// Path to a JSON file with sensor packages.
    /// Can also be set via WORKOUT_STATS_FILE environment variable.
    /// The built-in demo packages are used when omitted.
    #[arg(value_name = "FILE", env = "WORKOUT_STATS_FILE")]
    file: Option<PathBuf>,

    /// Output format for reports.
    #[arg(long, value_enum, env = "WORKOUT_STATS_FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Exit with an error if any package could not be processed.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let packages = match &args.file {
        Some(path) => load_packages(path)
            .with_context(|| format!("Failed to load packages from {}", path.display()))?,
        None => {
            log::info!("No package file given, using demo packages");
            demo_packages()
        }
    };

    let outcome = process_batch(&packages);
    print_reports(&outcome, args.format)?;
    print_failures(&outcome);

    if args.strict
        && let Some(summary) = outcome.failure_summary()
    {
        bail!(summary);
    }

    Ok(())
}

/// Prints successful reports to stdout, one per line.
fn print_reports(outcome: &BatchOutcome, format: OutputFormat) -> Result<()> {
    for report in outcome.reports() {
        match format {
            OutputFormat::Text => println!("{}", report),
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(report).context("Failed to serialize report")?)
            }
        }
    }
    Ok(())
}

/// Prints failed packages to stderr.
fn print_failures(outcome: &BatchOutcome) {
    for (package, error) in outcome.failures() {
        eprintln!("{}", failure_message(package, error));
    }
}
