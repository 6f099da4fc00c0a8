// Calibration module - seeding rate calculation and input validation
//
// This module provides the computational core of the calibrator:
// 1. geometry: drill configuration and the total-rows derivation
// 2. rate: the pounds-per-acre formula
// 3. validation: raw-text sanitizing and field validation
// 4. session: explicit state of one calibration screen
//
// The calibration workflow:
// 1. Validate drill settings text with `validate_config`
// 2. Start a CalibrationSession with the validated settings
// 3. Feed field edits into the session; each edit returns the new rate

pub mod geometry;
pub mod rate;
pub mod session;
pub mod turns;
pub mod validation;

pub use geometry::{total_rows, DrillConfig, DrillSettings};
pub use rate::{compute_rate, CalibrationRun, RateResult};
pub use session::{CalibrationSession, SettingsSummary};
pub use turns::{TurnCount, TurnOptions};
pub use validation::{validate_config, validate_rows_caught, validate_seed_weight, ConfigValidator};
