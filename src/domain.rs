//! Domain types for workout records.

use std::str::FromStr;

use crate::error::WorkoutError;
use crate::formulas::{
    STEP_LENGTH_M, STROKE_LENGTH_M, TrainingStats, calculate_distance_km,
    calculate_mean_speed_kmh, calculate_pool_speed_kmh, calculate_running_calories,
    calculate_swimming_calories, calculate_walking_calories,
};
use crate::report::Report;

/// Workout kinds recognised by the sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    /// Returns all workout kinds.
    pub fn all() -> &'static [WorkoutKind] {
        &[
            WorkoutKind::Running,
            WorkoutKind::Walking,
            WorkoutKind::Swimming,
        ]
    }

    /// Returns the short code the sensors send for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Returns the label used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of numeric fields a package of this kind carries.
    pub fn field_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Length of one counted action (step or stroke) in metres.
    pub fn action_length_m(&self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::Walking => STEP_LENGTH_M,
            WorkoutKind::Swimming => STROKE_LENGTH_M,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        WorkoutKind::all()
            .iter()
            .copied()
            .find(|kind| kind.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| WorkoutError::UnknownWorkoutCode(s.to_string()))
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Measurements shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Steps or strokes counted by the sensor.
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Measurements {
    /// Creates validated measurements. Duration and weight must be finite and positive.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }
}

/// A finished running workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub measurements: Measurements,
}

impl Running {
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        let record = Self {
            measurements: Measurements::new(action_count, duration_hours, weight_kg)?,
        };
        finite_stats(&record.into())?;
        Ok(record)
    }
}

/// A finished sports walking workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    pub measurements: Measurements,
    pub height_cm: f64,
}

impl Walking {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let record = Self {
            measurements: Measurements::new(action_count, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        };
        finite_stats(&record.into())?;
        Ok(record)
    }
}

/// A finished pool swimming workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub measurements: Measurements,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self, WorkoutError> {
        if pool_laps == 0 {
            return Err(WorkoutError::InvalidMeasurement {
                field: "pool_laps",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        let record = Self {
            measurements: Measurements::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            pool_laps,
        };
        finite_stats(&record.into())?;
        Ok(record)
    }
}

/// One finished workout, specialised by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutRecord {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl From<Running> for WorkoutRecord {
    fn from(record: Running) -> Self {
        WorkoutRecord::Running(record)
    }
}

impl From<Walking> for WorkoutRecord {
    fn from(record: Walking) -> Self {
        WorkoutRecord::Walking(record)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(record: Swimming) -> Self {
        WorkoutRecord::Swimming(record)
    }
}

impl WorkoutRecord {
    /// Builds a record from the raw package fields of the given kind.
    ///
    /// Field order:
    /// * Running: action_count, duration_hours, weight_kg
    /// * Walking: action_count, duration_hours, weight_kg, height_cm
    /// * Swimming: action_count, duration_hours, weight_kg, pool_length_m, pool_laps
    ///
    /// # Errors
    /// `InvalidFieldCount` if the number of fields does not match the kind,
    /// `InvalidMeasurement` if any value is out of range.
    pub fn from_fields(kind: WorkoutKind, fields: &[f64]) -> Result<Self, WorkoutError> {
        match (kind, fields) {
            (WorkoutKind::Running, &[action, duration, weight]) => {
                Ok(Running::new(whole("action_count", action, 0)?, duration, weight)?.into())
            }
            (WorkoutKind::Walking, &[action, duration, weight, height]) => Ok(Walking::new(
                whole("action_count", action, 0)?,
                duration,
                weight,
                height,
            )?
            .into()),
            (WorkoutKind::Swimming, &[action, duration, weight, length, laps]) => Ok(Swimming::new(
                whole("action_count", action, 0)?,
                duration,
                weight,
                length,
                whole("pool_laps", laps, 1)?,
            )?
            .into()),
            _ => Err(WorkoutError::InvalidFieldCount {
                kind,
                expected: kind.field_count(),
                actual: fields.len(),
            }),
        }
    }

    /// Returns the workout kind of this record.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutRecord::Running(_) => WorkoutKind::Running,
            WorkoutRecord::Walking(_) => WorkoutKind::Walking,
            WorkoutRecord::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    /// Returns the measurements common to every kind.
    pub fn measurements(&self) -> &Measurements {
        match self {
            WorkoutRecord::Running(r) => &r.measurements,
            WorkoutRecord::Walking(w) => &w.measurements,
            WorkoutRecord::Swimming(s) => &s.measurements,
        }
    }

    /// Distance covered in km, from the action count.
    pub fn distance_km(&self) -> f64 {
        calculate_distance_km(
            self.measurements().action_count,
            self.kind().action_length_m(),
        )
    }

    /// Mean speed in km/h.
    ///
    /// Swimming uses pool length × laps instead of the stroke-based distance.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            WorkoutRecord::Swimming(s) => calculate_pool_speed_kmh(
                s.pool_length_m,
                s.pool_laps,
                s.measurements.duration_hours,
            ),
            _ => calculate_mean_speed_kmh(self.distance_km(), self.measurements().duration_hours),
        }
    }

    /// Calories burned in kcal.
    pub fn calories_kcal(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match self {
            WorkoutRecord::Running(r) => calculate_running_calories(
                speed,
                r.measurements.weight_kg,
                r.measurements.duration_hours,
            ),
            WorkoutRecord::Walking(w) => calculate_walking_calories(
                speed,
                w.measurements.weight_kg,
                w.height_cm,
                w.measurements.duration_hours,
            ),
            WorkoutRecord::Swimming(s) => calculate_swimming_calories(
                speed,
                s.measurements.weight_kg,
                s.measurements.duration_hours,
            ),
        }
    }

    /// Computes all derived statistics.
    pub fn stats(&self) -> TrainingStats {
        TrainingStats {
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }

    /// Builds the report for this workout.
    pub fn report(&self) -> Report {
        Report::new(
            self.kind(),
            self.measurements().duration_hours,
            self.stats(),
        )
    }
}

/// Reads one sensor package: looks up the workout kind by code and builds its record.
///
/// # Errors
/// `UnknownWorkoutCode` for codes other than RUN, WLK and SWM; otherwise
/// whatever `WorkoutRecord::from_fields` rejects.
pub fn read_package(code: &str, fields: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    let kind = WorkoutKind::from_str(code)?;
    WorkoutRecord::from_fields(kind, fields)
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

fn whole(field: &'static str, value: f64, min: u32) -> Result<u32, WorkoutError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    if value < f64::from(min) {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: if min == 0 {
                "must not be negative"
            } else {
                "must be at least 1"
            },
        });
    }
    if value > f64::from(u32::MAX) {
        return Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "is too large",
        });
    }
    Ok(value as u32)
}

/// Rejects records whose derived statistics overflow, even though each input is in range.
fn finite_stats(record: &WorkoutRecord) -> Result<(), WorkoutError> {
    let stats = record.stats();
    let derived = [
        ("distance_km", stats.distance_km),
        ("mean_speed_kmh", stats.mean_speed_kmh),
        ("calories_kcal", stats.calories_kcal),
    ];
    match derived.into_iter().find(|(_, value)| !value.is_finite()) {
        Some((field, value)) => Err(WorkoutError::InvalidMeasurement {
            field,
            value,
            reason: "derived value is not finite",
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_kind_from_code() {
        assert_eq!(WorkoutKind::from_str("RUN").unwrap(), WorkoutKind::Running);
        assert_eq!(WorkoutKind::from_str("WLK").unwrap(), WorkoutKind::Walking);
        assert_eq!(WorkoutKind::from_str("SWM").unwrap(), WorkoutKind::Swimming);
    }

    #[test]
    fn test_kind_from_code_lowercase_and_whitespace() {
        assert_eq!(WorkoutKind::from_str(" run ").unwrap(), WorkoutKind::Running);
        assert_eq!(WorkoutKind::from_str("swm").unwrap(), WorkoutKind::Swimming);
    }

    #[test]
    fn test_kind_from_code_unknown() {
        assert_eq!(
            WorkoutKind::from_str("XYZ"),
            Err(WorkoutError::UnknownWorkoutCode("XYZ".to_string()))
        );
        assert!(WorkoutKind::from_str("").is_err());
    }

    #[test]
    fn test_kind_code_round_trip() {
        for kind in WorkoutKind::all() {
            assert_eq!(WorkoutKind::from_str(kind.code()).unwrap(), *kind);
        }
    }

    #[test]
    fn test_running_stats() {
        let record = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let stats = record.stats();
        assert!(approx_eq(stats.distance_km, 9.75, 1e-9));
        assert!(approx_eq(stats.mean_speed_kmh, 9.75, 1e-9));
        assert!(approx_eq(stats.calories_kcal, 797.805, 1e-6));
    }

    #[test]
    fn test_walking_stats() {
        let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let stats = record.stats();
        assert!(approx_eq(stats.distance_km, 5.85, 1e-9));
        assert!(approx_eq(stats.mean_speed_kmh, 5.85, 1e-9));
        assert_eq!(format!("{:.3}", stats.calories_kcal), "349.252");
    }

    #[test]
    fn test_swimming_stats_use_pool_for_speed() {
        let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let stats = record.stats();
        // Distance comes from strokes, speed from the pool.
        assert!(approx_eq(stats.distance_km, 0.9936, 1e-9));
        assert!(approx_eq(stats.mean_speed_kmh, 1.0, 1e-9));
        assert!(approx_eq(stats.calories_kcal, 336.0, 1e-9));
    }

    #[test]
    fn test_stats_are_idempotent() {
        let record = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let first = record.stats();
        let second = record.stats();
        assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
        assert_eq!(first.mean_speed_kmh.to_bits(), second.mean_speed_kmh.to_bits());
        assert_eq!(first.calories_kcal.to_bits(), second.calories_kcal.to_bits());
    }

    #[test]
    fn test_typed_constructors_match_dispatch() {
        let typed: WorkoutRecord = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap().into();
        let dispatched = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(typed, dispatched);
        assert_eq!(typed.kind(), WorkoutKind::Swimming);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::InvalidFieldCount {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2,
            }
        );

        // Extra fields are rejected too.
        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]),
            Err(WorkoutError::InvalidFieldCount { actual: 5, .. })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Err(WorkoutError::InvalidMeasurement {
                field: "duration_hours",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Running::new(100, f64::NAN, 75.0),
            Err(WorkoutError::InvalidMeasurement {
                field: "duration_hours",
                ..
            })
        ));
        assert!(matches!(
            Walking::new(100, 1.0, 75.0, f64::INFINITY),
            Err(WorkoutError::InvalidMeasurement {
                field: "height_cm",
                ..
            })
        ));
    }

    #[test]
    fn test_fractional_or_negative_counts_rejected() {
        assert!(matches!(
            read_package("RUN", &[150.5, 1.0, 75.0]),
            Err(WorkoutError::InvalidMeasurement {
                field: "action_count",
                ..
            })
        ));
        assert!(matches!(
            read_package("RUN", &[-1.0, 1.0, 75.0]),
            Err(WorkoutError::InvalidMeasurement {
                field: "action_count",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_pool_laps_rejected() {
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 0.0]),
            Err(WorkoutError::InvalidMeasurement {
                field: "pool_laps",
                ..
            })
        ));
        assert!(Swimming::new(720, 1.0, 80.0, 25.0, 0).is_err());
    }

    #[test]
    fn test_overflowing_calories_rejected() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0, 1e308]),
            Err(WorkoutError::InvalidMeasurement {
                field: "calories_kcal",
                ..
            })
        ));
    }

    #[test]
    fn test_tiny_duration_rejected() {
        assert!(matches!(
            read_package("WLK", &[9000.0, 1e-310, 75.0, 180.0]),
            Err(WorkoutError::InvalidMeasurement {
                field: "mean_speed_kmh",
                ..
            })
        ));
        assert!(Swimming::new(720, 1e-310, 80.0, 25.0, 40).is_err());
    }

    #[test]
    fn test_accepted_records_have_finite_stats() {
        for package in crate::packages::demo_packages() {
            let stats = read_package(&package.code, &package.fields).unwrap().stats();
            assert!(stats.distance_km.is_finite());
            assert!(stats.mean_speed_kmh.is_finite());
            assert!(stats.calories_kcal.is_finite());
        }
    }

    #[test]
    fn test_count_above_u32_rejected_as_too_large() {
        assert_eq!(
            read_package("RUN", &[5e9, 1.0, 75.0]),
            Err(WorkoutError::InvalidMeasurement {
                field: "action_count",
                value: 5e9,
                reason: "is too large",
            })
        );
    }

    #[test]
    fn test_zero_actions_allowed() {
        let record = read_package("RUN", &[0.0, 1.0, 75.0]).unwrap();
        assert_eq!(record.distance_km(), 0.0);
    }
}
