//! Human-readable workout reports.

use serde::Serialize;

use crate::domain::WorkoutKind;
use crate::formulas::TrainingStats;

/// Digits after the decimal point for every number in a report.
const PRECISION: usize = 3;

/// Summary of one finished workout, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub training_type: &'static str,
    /// Duration in hours.
    pub duration: f64,
    /// Distance in km.
    pub distance: f64,
    /// Mean speed in km/h.
    pub speed: f64,
    /// Calories burned in kcal.
    pub calories: f64,
}

impl Report {
    /// Creates a report from a kind, its duration and the computed statistics.
    pub fn new(kind: WorkoutKind, duration_hours: f64, stats: TrainingStats) -> Self {
        Self {
            training_type: kind.display_name(),
            duration: duration_hours,
            distance: stats.distance_km,
            speed: stats.mean_speed_kmh,
            calories: stats.calories_kcal,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_report(
            self.training_type,
            self.duration,
            self.distance,
            self.speed,
            self.calories,
        ))
    }
}

/// Formats workout figures into the fixed single-line report template.
pub fn format_report(
    training_type: &str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
) -> String {
    format!(
        "Тип тренировки: {training_type}; \
         Длительность: {duration:.PRECISION$} ч.; \
         Дистанция: {distance:.PRECISION$} км; \
         Ср. скорость: {speed:.PRECISION$} км/ч; \
         Потрачено ккал: {calories:.PRECISION$}."
    )
}
