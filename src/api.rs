// Public API for flutter_rust_bridge integration
// This module provides FFI functions for the Flutter shell to drive the calibrator core

#![allow(dead_code)] // FFI functions are called from Dart, not detected by Rust analyzer

pub mod types;

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::calibration::{
    self, CalibrationRun, DrillConfig, DrillSettings, RateResult, SettingsSummary, TurnCount,
};
use crate::context::AppContext;
use crate::error::{CalibratorError, InputError, SettingsError};
use crate::settings::SettingsText;
use types::SessionSnapshot;

// Re-export error code constants for FFI exposure
pub use crate::error::{InputErrorCodes, SettingsErrorCodes};

/// Global AppContext instance - Single dependency injection container
///
/// Holds the settings store and the active calibration session for the
/// lifetime of the library.
static APP_CONTEXT: Lazy<AppContext> = Lazy::new(AppContext::new);

/// Get the version of the calibrator core
#[flutter_rust_bridge::frb(sync)]
pub fn get_version() -> Result<String> {
    Ok(env!("CARGO_PKG_VERSION").to_string())
}

/// Point the settings store at a JSON file
///
/// Called once at startup with a path inside the app's documents directory.
/// Until then settings live in memory only.
#[flutter_rust_bridge::frb(sync)]
pub fn init_settings_store(path: String) -> Result<(), SettingsError> {
    crate::init_logging();
    APP_CONTEXT.use_settings_file(path)
}

// ============================================================================
// PURE CALCULATIONS
// ============================================================================

/// Number of seed rows for a drill width (feet) and row spacing (inches)
#[flutter_rust_bridge::frb(sync)]
pub fn total_rows(width_feet: f64, row_spacing_inches: f64) -> u32 {
    calibration::total_rows(width_feet, row_spacing_inches)
}

/// Validate the rows-caught field against the drill's total rows
///
/// # Returns
/// * `Ok(None)` - field is blank
/// * `Ok(Some(n))` - accepted value
/// * `Err(InputError::RowsExceedCapacity)` - value above total rows
#[flutter_rust_bridge::frb(sync)]
pub fn validate_rows_caught(text: String, total_rows: u32) -> Result<Option<u32>, InputError> {
    calibration::validate_rows_caught(&text, total_rows)
}

/// Parse the seed-weight field, `None` while blank
#[flutter_rust_bridge::frb(sync)]
pub fn validate_seed_weight(text: String) -> Option<f64> {
    calibration::validate_seed_weight(&text)
}

/// Seeding rate for one calibration run
///
/// A turn count of zero cannot come from the picker and reads as incomplete.
#[flutter_rust_bridge::frb(sync)]
pub fn compute_rate(
    width_feet: f64,
    row_spacing_inches: f64,
    distance_per_turn_inches: f64,
    turns: u32,
    rows_caught: Option<u32>,
    seed_weight_pounds: Option<f64>,
) -> RateResult {
    let Some(turns) = TurnCount::new(turns) else {
        return RateResult::Incomplete;
    };

    let run = CalibrationRun {
        distance_per_turn_inches,
        turns,
        rows_caught,
        seed_weight_pounds,
    };
    calibration::compute_rate(&DrillConfig::new(width_feet, row_spacing_inches), &run)
}

/// Validate the configuration form without saving it
#[flutter_rust_bridge::frb(sync)]
pub fn validate_config(
    drill_width: String,
    row_spacing: String,
    distance_per_turn: String,
) -> Result<DrillSettings, InputError> {
    calibration::validate_config(&drill_width, &row_spacing, &distance_per_turn)
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Text to prefill the configuration form with
///
/// Falls back to the defaults (20 ft, 7.5 in, 86 in) when nothing is stored
/// or the store cannot be read.
#[flutter_rust_bridge::frb(sync)]
pub fn load_drill_settings() -> SettingsText {
    APP_CONTEXT.load_settings()
}

/// Validate the configuration form and persist it
///
/// # Errors
/// - `CalibratorError::Input` - a field failed validation, nothing written
/// - `CalibratorError::Settings` - the store rejected the write
#[flutter_rust_bridge::frb(sync)]
pub fn save_drill_settings(
    drill_width: String,
    row_spacing: String,
    distance_per_turn: String,
) -> Result<DrillSettings, CalibratorError> {
    APP_CONTEXT.save_settings(&SettingsText::new(
        drill_width,
        row_spacing,
        distance_per_turn,
    ))
}

// ============================================================================
// CALIBRATION SESSION
// ============================================================================

/// Open the calibration screen with the stored settings
#[flutter_rust_bridge::frb(sync)]
pub fn start_session() -> Result<SessionSnapshot, CalibratorError> {
    APP_CONTEXT.start_session()
}

/// Close the calibration screen
#[flutter_rust_bridge::frb(sync)]
pub fn end_session() -> Result<bool, SettingsError> {
    APP_CONTEXT.end_session()
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_turns(turns: u32) -> Result<SessionSnapshot, SettingsError> {
    APP_CONTEXT.select_turns(turns)
}

/// Apply a rows-caught edit; a rejected value keeps the previous one
#[flutter_rust_bridge::frb(sync)]
pub fn set_rows_caught(text: String) -> Result<SessionSnapshot, CalibratorError> {
    APP_CONTEXT.set_rows_caught(&text)
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_seed_weight(text: String) -> Result<SessionSnapshot, SettingsError> {
    APP_CONTEXT.set_seed_weight(&text)
}

#[flutter_rust_bridge::frb(sync)]
pub fn clear_inputs() -> Result<SessionSnapshot, SettingsError> {
    APP_CONTEXT.clear_inputs()
}

/// Everything the calibration screen shows right now
#[flutter_rust_bridge::frb(sync)]
pub fn current_session() -> Result<SessionSnapshot, SettingsError> {
    APP_CONTEXT.snapshot()
}

#[flutter_rust_bridge::frb(sync)]
pub fn current_rate() -> Result<RateResult, SettingsError> {
    Ok(APP_CONTEXT.snapshot()?.rate)
}

#[flutter_rust_bridge::frb(sync)]
pub fn current_settings_summary() -> Result<SettingsSummary, SettingsError> {
    Ok(APP_CONTEXT.snapshot()?.summary)
}

/// Turn counts offered by the picker, first one preselected
#[flutter_rust_bridge::frb(sync)]
pub fn get_turn_options() -> Vec<u32> {
    APP_CONTEXT.turn_options().values()
}

// ============================================================================
// ERROR CODE ACCESSORS
// ============================================================================
// These functions expose error code constants from InputErrorCodes and SettingsErrorCodes

/// Get InputErrorCodes as a structured object with all error code constants
#[flutter_rust_bridge::frb(sync)]
pub fn get_input_error_codes() -> InputErrorCodes {
    InputErrorCodes {}
}

/// Get SettingsErrorCodes as a structured object with all error code constants
#[flutter_rust_bridge::frb(sync)]
pub fn get_settings_error_codes() -> SettingsErrorCodes {
    SettingsErrorCodes {}
}
