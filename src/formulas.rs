//! Distance, speed and calorie formulas for each workout kind.

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step (running and walking), in metres.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by one swimming stroke, in metres.
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie coefficients.
mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie coefficients.
mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;
}

/// Swimming calorie coefficients.
mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Statistics derived from one workout record.
///
/// Always computed on demand from the record, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingStats {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Calculates distance in km from the number of actions and the length of one action.
pub fn calculate_distance_km(action_count: u32, action_length_m: f64) -> f64 {
    f64::from(action_count) * action_length_m / M_IN_KM
}

/// Calculates mean speed in km/h.
///
/// `duration_hours` must be positive; records guarantee this at construction.
pub fn calculate_mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

/// Calculates mean swimming speed from pool length and completed laps.
///
/// Formula:
/// ```text
/// speed = pool_length_m × pool_laps / 1000 / duration_hours
/// ```
pub fn calculate_pool_speed_kmh(pool_length_m: f64, pool_laps: u32, duration_hours: f64) -> f64 {
    pool_length_m * f64::from(pool_laps) / M_IN_KM / duration_hours
}

/// Calculates calories burned while running.
///
/// Formula:
/// ```text
/// kcal = (18 × speed + 1.79) × weight / 1000 × duration_h × 60
/// ```
pub fn calculate_running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (running::SPEED_MULTIPLIER * mean_speed_kmh + running::SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_hours
        * MIN_IN_H
}

/// Calculates calories burned during sports walking.
///
/// Speed is converted to m/s and height to metres before use.
///
/// Formula:
/// ```text
/// kcal = (0.035 × weight + (speed × 0.278)² / (height_cm / 100) × 0.029 × weight) × duration_h × 60
/// ```
pub fn calculate_walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_hours: f64,
) -> f64 {
    let speed_ms = mean_speed_kmh * walking::KMH_IN_MSEC;
    let height_m = height_cm / walking::CM_IN_M;

    (walking::WEIGHT_MULTIPLIER * weight_kg
        + speed_ms.powi(2) / height_m * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_hours
        * MIN_IN_H
}

/// Calculates calories burned while swimming.
///
/// Formula:
/// ```text
/// kcal = (speed + 1.1) × 2 × weight × duration_h
/// ```
pub fn calculate_swimming_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    (mean_speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg * duration_hours
}
