// Input validation error types and constants

use crate::error::ErrorCode;
use crate::settings::SettingField;
use flutter_rust_bridge::frb;
use log::warn;
use std::fmt;

/// Input error code constants exposed to Dart via FFI
///
/// These constants provide a single source of truth for error codes
/// shared between Rust and Dart. The flutter_rust_bridge will automatically
/// generate corresponding Dart constants.
///
/// Error code range: 1001-1007
#[frb(unignore)]
pub struct InputErrorCodes {}

#[frb]
impl InputErrorCodes {
    /// Rows caught exceeds the rows the drill physically has
    pub const ROWS_EXCEED_CAPACITY: i32 = 1001;

    /// A required settings field was blank
    pub const EMPTY_FIELD: i32 = 1002;

    /// A settings field could not be parsed as a number
    pub const NOT_A_NUMBER: i32 = 1003;

    /// Drill width must be greater than 0 feet
    pub const WIDTH_NOT_POSITIVE: i32 = 1004;

    /// Row spacing outside [0.5, 36] inches
    pub const SPACING_OUT_OF_RANGE: i32 = 1005;

    /// Row spacing not strictly less than drill width
    pub const SPACING_EXCEEDS_WIDTH: i32 = 1006;

    /// Distance per turn must be greater than 0 inches
    pub const DISTANCE_NOT_POSITIVE: i32 = 1007;

    // Getter methods for FFI exposure (flutter_rust_bridge requires methods not const)

    /// Get ROWS_EXCEED_CAPACITY error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn rows_exceed_capacity() -> i32 {
        Self::ROWS_EXCEED_CAPACITY
    }

    /// Get EMPTY_FIELD error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn empty_field() -> i32 {
        Self::EMPTY_FIELD
    }

    /// Get NOT_A_NUMBER error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn not_a_number() -> i32 {
        Self::NOT_A_NUMBER
    }

    /// Get WIDTH_NOT_POSITIVE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn width_not_positive() -> i32 {
        Self::WIDTH_NOT_POSITIVE
    }

    /// Get SPACING_OUT_OF_RANGE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn spacing_out_of_range() -> i32 {
        Self::SPACING_OUT_OF_RANGE
    }

    /// Get SPACING_EXCEEDS_WIDTH error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn spacing_exceeds_width() -> i32 {
        Self::SPACING_EXCEEDS_WIDTH
    }

    /// Get DISTANCE_NOT_POSITIVE error code
    #[flutter_rust_bridge::frb(sync, getter)]
    pub fn distance_not_positive() -> i32 {
        Self::DISTANCE_NOT_POSITIVE
    }
}

/// Log a rejected user input with structured context
///
/// Input errors are expected during normal editing, so they are logged at
/// warn level rather than error.
pub fn log_input_error(err: &InputError, context: &str) {
    warn!(
        "Input rejected in {}: code={}, component=InputValidation, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// User-input validation errors
///
/// Every variant is recoverable: the user corrects the field and retries.
///
/// Error code range: 1001-1007
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InputError {
    /// Rows caught is greater than the drill's total rows
    RowsExceedCapacity { total_rows: u32 },

    /// Field was blank after stripping non-numeric characters
    EmptyField { field: SettingField },

    /// Field did not parse as a decimal number
    NotANumber { field: SettingField },

    /// Drill width was zero
    WidthNotPositive,

    /// Row spacing outside the realistic range
    SpacingOutOfRange { spacing: f64 },

    /// Row spacing at or above the drill width in inches
    SpacingExceedsWidth { spacing: f64, width_inches: f64 },

    /// Distance per turn was zero
    DistanceNotPositive,
}

impl ErrorCode for InputError {
    fn code(&self) -> i32 {
        match self {
            InputError::RowsExceedCapacity { .. } => InputErrorCodes::ROWS_EXCEED_CAPACITY,
            InputError::EmptyField { .. } => InputErrorCodes::EMPTY_FIELD,
            InputError::NotANumber { .. } => InputErrorCodes::NOT_A_NUMBER,
            InputError::WidthNotPositive => InputErrorCodes::WIDTH_NOT_POSITIVE,
            InputError::SpacingOutOfRange { .. } => InputErrorCodes::SPACING_OUT_OF_RANGE,
            InputError::SpacingExceedsWidth { .. } => InputErrorCodes::SPACING_EXCEEDS_WIDTH,
            InputError::DistanceNotPositive => InputErrorCodes::DISTANCE_NOT_POSITIVE,
        }
    }

    fn message(&self) -> String {
        match self {
            InputError::RowsExceedCapacity { total_rows } => format!(
                "Cannot catch more than {} rows based on current settings",
                total_rows
            ),
            InputError::EmptyField { field } => {
                format!("{} is required", field.label())
            }
            InputError::NotANumber { field } => {
                format!("{} must be a valid number", field.label())
            }
            InputError::WidthNotPositive => "Drill width must be greater than 0 feet".to_string(),
            InputError::SpacingOutOfRange { spacing } => format!(
                "Row spacing must be between 0.5 and 36 inches (got {})",
                spacing
            ),
            InputError::SpacingExceedsWidth {
                spacing,
                width_inches,
            } => format!(
                "Row spacing must be less than the drill width ({} in >= {} in)",
                spacing, width_inches
            ),
            InputError::DistanceNotPositive => {
                "Distance per turn must be greater than 0 inches".to_string()
            }
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InputError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_codes() {
        assert_eq!(
            InputError::RowsExceedCapacity { total_rows: 32 }.code(),
            InputErrorCodes::ROWS_EXCEED_CAPACITY
        );
        assert_eq!(
            InputError::EmptyField {
                field: SettingField::DrillWidth
            }
            .code(),
            InputErrorCodes::EMPTY_FIELD
        );
        assert_eq!(
            InputError::NotANumber {
                field: SettingField::RowSpacing
            }
            .code(),
            InputErrorCodes::NOT_A_NUMBER
        );
        assert_eq!(
            InputError::WidthNotPositive.code(),
            InputErrorCodes::WIDTH_NOT_POSITIVE
        );
        assert_eq!(
            InputError::SpacingOutOfRange { spacing: 40.0 }.code(),
            InputErrorCodes::SPACING_OUT_OF_RANGE
        );
        assert_eq!(
            InputError::SpacingExceedsWidth {
                spacing: 12.0,
                width_inches: 12.0
            }
            .code(),
            InputErrorCodes::SPACING_EXCEEDS_WIDTH
        );
        assert_eq!(
            InputError::DistanceNotPositive.code(),
            InputErrorCodes::DISTANCE_NOT_POSITIVE
        );
    }

    #[test]
    fn test_rows_exceed_capacity_message_carries_total() {
        let err = InputError::RowsExceedCapacity { total_rows: 32 };
        assert_eq!(
            err.message(),
            "Cannot catch more than 32 rows based on current settings"
        );
    }

    #[test]
    fn test_field_messages_name_the_field() {
        let err = InputError::EmptyField {
            field: SettingField::DistancePerTurn,
        };
        assert_eq!(err.message(), "Distance per turn is required");

        let err = InputError::NotANumber {
            field: SettingField::DrillWidth,
        };
        assert!(err.message().contains("Drill width"));
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::WidthNotPositive;
        let display = format!("{}", err);
        assert!(display.contains("InputError"));
        assert!(display.contains(&err.code().to_string()));
    }

    #[test]
    fn test_error_code_getters() {
        assert_eq!(InputErrorCodes::rows_exceed_capacity(), 1001);
        assert_eq!(InputErrorCodes::empty_field(), 1002);
        assert_eq!(InputErrorCodes::not_a_number(), 1003);
        assert_eq!(InputErrorCodes::width_not_positive(), 1004);
        assert_eq!(InputErrorCodes::spacing_out_of_range(), 1005);
        assert_eq!(InputErrorCodes::spacing_exceeds_width(), 1006);
        assert_eq!(InputErrorCodes::distance_not_positive(), 1007);
    }
}
