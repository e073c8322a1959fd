//! Batch processing of sensor packages.
//!
//! Every package in a batch is attempted in order. A failing package is
//! recorded and logged, and never stops the packages after it.

use log::{debug, warn};

use crate::domain::read_package;
use crate::error::WorkoutError;
use crate::packages::Package;
use crate::report::Report;

/// Result of processing a single package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageOutcome {
    /// Position of the package in the batch (0-based).
    pub index: usize,
    pub code: String,
    pub result: Result<Report, WorkoutError>,
}

/// Results for a whole batch, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub outcomes: Vec<PackageOutcome>,
}

impl BatchOutcome {
    /// Returns the successful reports in input order.
    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Returns the failed packages with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&PackageOutcome, &WorkoutError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o, e)))
    }

    /// Returns true if every package produced a report.
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Summary of how many packages failed, or None if the batch is clean.
    pub fn failure_summary(&self) -> Option<String> {
        if self.is_clean() {
            return None;
        }
        Some(format!(
            "{} of {} packages could not be processed",
            self.failures().count(),
            self.outcomes.len()
        ))
    }
}

/// Describes a failed package for the user, one line per failure.
///
/// Unknown codes keep the program's fixed message; other failures name the
/// package by its 1-based position.
pub fn failure_message(outcome: &PackageOutcome, error: &WorkoutError) -> String {
    match error {
        WorkoutError::UnknownWorkoutCode(code) => {
            format!("<указанного типа тренировки \"{}\" нет в программе>", code)
        }
        other => format!("package {} ({}): {}", outcome.index + 1, outcome.code, other),
    }
}

/// Turns one package into its report.
pub fn process_package(package: &Package) -> Result<Report, WorkoutError> {
    let record = read_package(&package.code, &package.fields)?;
    Ok(record.report())
}

/// Processes all packages, collecting one outcome per package.
pub fn process_batch(packages: &[Package]) -> BatchOutcome {
    let outcomes = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let result = process_package(package);
            match &result {
                Ok(report) => debug!("package {} ({}): {}", index, package.code, report),
                Err(e) => warn!("package {} ({}) rejected: {}", index, package.code, e),
            }
            PackageOutcome {
                index,
                code: package.code.clone(),
                result,
            }
        })
        .collect();

    BatchOutcome { outcomes }
}
