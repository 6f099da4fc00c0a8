// Seeding rate calculation
//
// Scales the seed caught from the tested rows up to the full drill width,
// then divides by the area the drill would have covered over the run:
//
//   distance_feet   = distance_per_turn_inches / 12
//   total_rows      = (width * 12) / spacing          (real-valued)
//   area_acres      = (width * distance_feet * turns) / 43560
//   pounds_per_acre = (seed_weight * total_rows / rows_caught) / area_acres
//
// The result is rounded to one decimal place.

use std::fmt;

use crate::calibration::geometry::{DrillConfig, INCHES_PER_FOOT, SQUARE_FEET_PER_ACRE};
use crate::calibration::turns::TurnCount;

/// Inputs of a single calibration pass
///
/// `rows_caught` and `seed_weight_pounds` are `None` until the user has
/// entered them.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CalibrationRun {
    pub distance_per_turn_inches: f64,
    pub turns: TurnCount,
    pub rows_caught: Option<u32>,
    pub seed_weight_pounds: Option<f64>,
}

impl CalibrationRun {
    pub fn new(distance_per_turn_inches: f64, turns: TurnCount) -> Self {
        Self {
            distance_per_turn_inches,
            turns,
            rows_caught: None,
            seed_weight_pounds: None,
        }
    }

    pub fn with_rows_caught(mut self, rows_caught: u32) -> Self {
        self.rows_caught = Some(rows_caught);
        self
    }

    pub fn with_seed_weight(mut self, seed_weight_pounds: f64) -> Self {
        self.seed_weight_pounds = Some(seed_weight_pounds);
        self
    }
}

/// Outcome of a rate calculation
///
/// `Incomplete` is the steady state of a partially filled form, not an
/// error. It reads as a rate of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", content = "pounds_per_acre", rename_all = "snake_case")]
pub enum RateResult {
    /// Some input is missing or out of range
    #[default]
    Incomplete,
    /// Seeding rate in pounds per acre, rounded to one decimal
    Rate(f64),
}

impl RateResult {
    /// Rate in lbs/acre, 0.0 while incomplete
    pub fn pounds_per_acre(&self) -> f64 {
        match self {
            RateResult::Incomplete => 0.0,
            RateResult::Rate(rate) => *rate,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, RateResult::Rate(_))
    }
}

impl fmt::Display for RateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} lbs/acre", self.pounds_per_acre())
    }
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the seeding rate for a drill and a calibration run
///
/// Every precondition is checked before the formula runs, so missing,
/// zero or out-of-range inputs produce `RateResult::Incomplete` rather than
/// a division by zero.
///
/// # Preconditions for a rate
/// * width, spacing and distance per turn finite and > 0
/// * rows caught present, > 0 and <= the drill's total rows
/// * seed weight present, finite and > 0
pub fn compute_rate(config: &DrillConfig, run: &CalibrationRun) -> RateResult {
    let width = config.width_feet;
    let spacing = config.row_spacing_inches;
    let distance_inches = run.distance_per_turn_inches;

    let (rows_caught, seed_weight) = match (run.rows_caught, run.seed_weight_pounds) {
        (Some(rows), Some(weight)) => (rows, weight),
        _ => return RateResult::Incomplete,
    };

    let geometry_valid = [width, spacing, distance_inches]
        .iter()
        .all(|value| value.is_finite() && *value > 0.0);
    if !geometry_valid {
        return RateResult::Incomplete;
    }

    if rows_caught == 0 || rows_caught > config.total_rows() {
        return RateResult::Incomplete;
    }
    if !seed_weight.is_finite() || seed_weight <= 0.0 {
        return RateResult::Incomplete;
    }

    let distance_feet = distance_inches / INCHES_PER_FOOT;
    let total_rows = config.row_count_exact();
    let area_acres = (width * distance_feet * f64::from(run.turns.get())) / SQUARE_FEET_PER_ACRE;
    let pounds_per_acre = (seed_weight * total_rows / f64::from(rows_caught)) / area_acres;

    if !pounds_per_acre.is_finite() {
        return RateResult::Incomplete;
    }

    RateResult::Rate(round_to_tenth(pounds_per_acre))
}
