//! Error types for the workout-stats application.

use thiserror::Error;

use crate::domain::WorkoutKind;

/// Errors that can occur when turning a sensor package into a workout record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout code: {0}")]
    UnknownWorkoutCode(String),

    #[error("{kind} expects {expected} fields, got {actual}")]
    InvalidFieldCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {field} value {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors that can occur when loading a package file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot read file: {0}")]
    CannotRead(String),

    #[error("invalid package format: {0}")]
    InvalidFormat(String),
}
