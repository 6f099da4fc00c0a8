// CalibrationSession - explicit state of one calibration screen
//
// The session owns the current inputs as values and recomputes the rate on
// every change. Each setter hands back the fresh RateResult, so the UI never
// has to track which inputs the rate depends on.

use std::fmt;

use log::{debug, warn};

use crate::calibration::geometry::{DrillConfig, DrillSettings};
use crate::calibration::rate::{compute_rate, CalibrationRun, RateResult};
use crate::calibration::turns::{TurnCount, TurnOptions};
use crate::calibration::validation::{
    decimal_chars, digits_only, validate_rows_caught, validate_seed_weight,
};
use crate::error::{log_input_error, InputError};
use crate::settings::format_decimal;

/// Drill settings shown alongside the result
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SettingsSummary {
    pub width_feet: f64,
    pub row_spacing_inches: f64,
    pub distance_per_turn_inches: f64,
    pub total_rows: u32,
}

impl SettingsSummary {
    pub fn from_settings(settings: &DrillSettings) -> Self {
        Self {
            width_feet: settings.drill.width_feet,
            row_spacing_inches: settings.drill.row_spacing_inches,
            distance_per_turn_inches: settings.distance_per_turn_inches,
            total_rows: settings.drill.total_rows(),
        }
    }
}

impl fmt::Display for SettingsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Width: {} feet", format_decimal(self.width_feet))?;
        writeln!(f, "Spacing: {} inches", format_decimal(self.row_spacing_inches))?;
        writeln!(
            f,
            "Distance/Turn: {} inches",
            format_decimal(self.distance_per_turn_inches)
        )?;
        write!(f, "Total Rows: {}", self.total_rows)
    }
}

/// Inputs and derived rate for a single calibration screen
#[derive(Debug, Clone)]
pub struct CalibrationSession {
    settings: DrillSettings,
    turn_options: TurnOptions,
    turns: TurnCount,
    rows_text: String,
    rows_caught: Option<u32>,
    seed_weight_text: String,
    seed_weight: Option<f64>,
    rate: RateResult,
}

impl CalibrationSession {
    /// Start a session with blank inputs and the first turn option selected
    pub fn new(settings: DrillSettings, turn_options: TurnOptions) -> Self {
        let turns = turn_options.first();
        Self {
            settings,
            turn_options,
            turns,
            rows_text: String::new(),
            rows_caught: None,
            seed_weight_text: String::new(),
            seed_weight: None,
            rate: RateResult::Incomplete,
        }
    }

    /// Session with the default turn options
    pub fn with_default_turns(settings: DrillSettings) -> Self {
        Self::new(settings, TurnOptions::default())
    }

    /// Pick a turn count from the option set
    ///
    /// Values outside the set cannot come from the picker; they are logged
    /// and leave the current selection in place.
    pub fn select_turns(&mut self, turns: u32) -> RateResult {
        match self.turn_options.select(turns) {
            Some(selected) => self.turns = selected,
            None => warn!(
                "[CalibrationSession] Ignoring turn count {} not in {:?}",
                turns,
                self.turn_options.values()
            ),
        }
        self.recompute()
    }

    /// Apply an edit of the rows-caught field
    ///
    /// A value above the drill's total rows is rejected and the previous
    /// value stays in place.
    pub fn set_rows_caught(&mut self, text: &str) -> Result<RateResult, InputError> {
        let rows = validate_rows_caught(text, self.total_rows()).inspect_err(|err| {
            log_input_error(err, "set_rows_caught");
        })?;

        self.rows_caught = rows;
        self.rows_text = digits_only(text);
        Ok(self.recompute())
    }

    /// Apply an edit of the seed-weight field
    pub fn set_seed_weight(&mut self, text: &str) -> RateResult {
        self.seed_weight = validate_seed_weight(text);
        self.seed_weight_text = decimal_chars(text);
        self.recompute()
    }

    /// Replace the drill settings, e.g. after returning from configuration
    ///
    /// Rows caught is kept even if it now exceeds the new total rows; the
    /// rate then reads as incomplete until the user corrects it.
    pub fn update_settings(&mut self, settings: DrillSettings) -> RateResult {
        self.settings = settings;
        self.recompute()
    }

    /// Clear the per-run inputs, keeping settings and turn selection
    pub fn clear_inputs(&mut self) -> RateResult {
        self.rows_text.clear();
        self.rows_caught = None;
        self.seed_weight_text.clear();
        self.seed_weight = None;
        self.recompute()
    }

    pub fn rate(&self) -> RateResult {
        self.rate
    }

    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    pub fn config(&self) -> &DrillConfig {
        &self.settings.drill
    }

    pub fn turns(&self) -> TurnCount {
        self.turns
    }

    pub fn turn_options(&self) -> &TurnOptions {
        &self.turn_options
    }

    /// Sanitized rows-caught text as the field should display it
    pub fn rows_text(&self) -> &str {
        &self.rows_text
    }

    /// Sanitized seed-weight text as the field should display it
    pub fn seed_weight_text(&self) -> &str {
        &self.seed_weight_text
    }

    pub fn total_rows(&self) -> u32 {
        self.settings.drill.total_rows()
    }

    /// Placeholder for the rows-caught field
    pub fn rows_hint(&self) -> String {
        format!("Max {} rows", self.total_rows())
    }

    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary::from_settings(&self.settings)
    }

    /// Current inputs as a calibration run
    pub fn run(&self) -> CalibrationRun {
        CalibrationRun {
            distance_per_turn_inches: self.settings.distance_per_turn_inches,
            turns: self.turns,
            rows_caught: self.rows_caught,
            seed_weight_pounds: self.seed_weight,
        }
    }

    fn recompute(&mut self) -> RateResult {
        self.rate = compute_rate(&self.settings.drill, &self.run());
        debug!("[CalibrationSession] Recomputed rate: {}", self.rate);
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CalibrationSession {
        CalibrationSession::with_default_turns(DrillSettings::new(20.0, 7.5, 86.0))
    }

    #[test]
    fn test_new_session_is_incomplete() {
        let session = session();
        assert_eq!(session.rate(), RateResult::Incomplete);
        assert_eq!(session.turns().get(), 1);
        assert_eq!(session.rows_text(), "");
        assert_eq!(session.seed_weight_text(), "");
    }

    #[test]
    fn test_setters_return_recomputed_rate() {
        let mut session = session();
        assert_eq!(session.select_turns(10), RateResult::Incomplete);
        assert_eq!(session.set_rows_caught("4"), Ok(RateResult::Incomplete));

        let rate = session.set_seed_weight("2.0");
        assert_eq!(rate, RateResult::Rate(486.3));
        assert_eq!(session.rate(), rate);
    }

    #[test]
    fn test_rejected_rows_keep_previous_value() {
        let mut session = session();
        session.set_rows_caught("4").unwrap();

        let err = session.set_rows_caught("33").unwrap_err();
        assert_eq!(err, InputError::RowsExceedCapacity { total_rows: 32 });
        assert_eq!(session.rows_text(), "4");
        assert_eq!(session.run().rows_caught, Some(4));
    }

    #[test]
    fn test_blank_field_reads_zero() {
        let mut session = session();
        session.select_turns(10);
        session.set_rows_caught("4").unwrap();
        session.set_seed_weight("2.0");

        let rate = session.set_seed_weight("");
        assert_eq!(rate.pounds_per_acre(), 0.0);

        session.set_seed_weight("2.0");
        let rate = session.set_rows_caught("").unwrap();
        assert_eq!(rate.pounds_per_acre(), 0.0);
    }

    #[test]
    fn test_unknown_turns_are_ignored() {
        let mut session = session();
        session.select_turns(20);
        session.select_turns(7);
        assert_eq!(session.turns().get(), 20);
    }

    #[test]
    fn test_text_is_sanitized() {
        let mut session = session();
        session.set_rows_caught("1a2").unwrap();
        session.set_seed_weight("2.5.0 lbs");
        assert_eq!(session.rows_text(), "12");
        assert_eq!(session.seed_weight_text(), "2.5.0");
        assert_eq!(session.run().seed_weight_pounds, Some(2.5));
    }

    #[test]
    fn test_update_settings_rechecks_capacity() {
        let mut session = session();
        session.select_turns(10);
        session.set_rows_caught("30").unwrap();
        assert!(session.set_seed_weight("2").is_complete());

        // 10 ft at 7.5 in only carries 16 rows
        let rate = session.update_settings(DrillSettings::new(10.0, 7.5, 86.0));
        assert_eq!(rate, RateResult::Incomplete);
        assert_eq!(session.rows_hint(), "Max 16 rows");
    }

    #[test]
    fn test_clear_inputs() {
        let mut session = session();
        session.select_turns(30);
        session.set_rows_caught("4").unwrap();
        session.set_seed_weight("2");

        assert_eq!(session.clear_inputs(), RateResult::Incomplete);
        assert_eq!(session.turns().get(), 30);
        assert_eq!(session.run().rows_caught, None);
    }

    #[test]
    fn test_rows_hint_and_summary() {
        let session = session();
        assert_eq!(session.rows_hint(), "Max 32 rows");

        let summary = session.summary();
        assert_eq!(summary.total_rows, 32);
        assert_eq!(
            summary.to_string(),
            "Width: 20 feet\nSpacing: 7.5 inches\nDistance/Turn: 86 inches\nTotal Rows: 32"
        );
    }

    #[test]
    fn test_alternate_turn_options() {
        let options = TurnOptions::new(&[10, 20, 30, 40]).unwrap();
        let session = CalibrationSession::new(DrillSettings::new(20.0, 7.5, 86.0), options);
        assert_eq!(session.turns().get(), 10);
    }
}
