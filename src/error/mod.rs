// Error types for the drill calibrator core
//
// This module defines custom error types for input validation and settings
// persistence, providing structured error handling with error codes suitable
// for FFI communication.

mod input;
mod settings;

pub use input::{log_input_error, InputError, InputErrorCodes};
pub use settings::{log_settings_error, SettingsError, SettingsErrorCodes};

use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the FFI boundary.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Either error class, for operations that validate input and touch state
#[derive(Debug, Clone, PartialEq)]
pub enum CalibratorError {
    Input(InputError),
    Settings(SettingsError),
}

impl ErrorCode for CalibratorError {
    fn code(&self) -> i32 {
        match self {
            CalibratorError::Input(err) => err.code(),
            CalibratorError::Settings(err) => err.code(),
        }
    }

    fn message(&self) -> String {
        match self {
            CalibratorError::Input(err) => err.message(),
            CalibratorError::Settings(err) => err.message(),
        }
    }
}

impl fmt::Display for CalibratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibratorError::Input(err) => err.fmt(f),
            CalibratorError::Settings(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CalibratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalibratorError::Input(err) => Some(err),
            CalibratorError::Settings(err) => Some(err),
        }
    }
}

impl From<InputError> for CalibratorError {
    fn from(err: InputError) -> Self {
        CalibratorError::Input(err)
    }
}

impl From<SettingsError> for CalibratorError {
    fn from(err: SettingsError) -> Self {
        CalibratorError::Settings(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_trait() {
        let input_err: &dyn ErrorCode = &InputError::WidthNotPositive;
        assert_eq!(input_err.code(), 1004);

        let settings_err: &dyn ErrorCode = &SettingsError::NoActiveSession;
        assert_eq!(settings_err.code(), 2004);
    }

    #[test]
    fn test_error_propagation() {
        fn may_fail() -> Result<(), InputError> {
            Err(InputError::DistanceNotPositive)
        }

        fn caller() -> Result<(), InputError> {
            may_fail()?;
            Ok(())
        }

        assert!(caller().is_err());
    }

    #[test]
    fn test_calibrator_error_delegates() {
        fn check_rows() -> Result<(), InputError> {
            Err(InputError::RowsExceedCapacity { total_rows: 32 })
        }

        fn validate() -> Result<(), CalibratorError> {
            check_rows()?;
            Ok(())
        }

        let err = validate().unwrap_err();
        assert_eq!(err.code(), InputErrorCodes::ROWS_EXCEED_CAPACITY);
        assert!(err.message().contains("32"));
        assert!(err.to_string().contains("InputError"));

        let err: CalibratorError = SettingsError::NoActiveSession.into();
        assert_eq!(err.code(), SettingsErrorCodes::NO_ACTIVE_SESSION);
    }
}
