// Drill Calibrator Core - seeding rate calculation for grain drill calibration
// Pure rate math, settings persistence and session state behind a Flutter bridge

// Module declarations
pub mod api;
pub mod calibration;
pub mod config;
pub mod context;
pub mod error;
pub mod managers;
pub mod settings;

// Re-exports for convenience
pub use calibration::{
    compute_rate, total_rows, validate_config, validate_rows_caught, validate_seed_weight,
    CalibrationRun, CalibrationSession, DrillConfig, DrillSettings, RateResult, TurnCount,
    TurnOptions,
};
pub use error::{CalibratorError, ErrorCode, InputError, SettingsError};

use std::sync::Once;

static LOGGING: Once = Once::new();

/// Install the tracing subscriber; later calls are no-ops
///
/// On Android output goes to logcat, elsewhere to stderr. `log` records from
/// the library are forwarded through `tracing`.
pub fn init_logging() {
    LOGGING.call_once(install_subscriber);
}

#[cfg(target_os = "android")]
fn install_subscriber() {
    use tracing_subscriber::prelude::*;

    match tracing_android::layer("DrillCalibrator") {
        Ok(layer) => {
            if let Err(err) = tracing_subscriber::registry().with(layer).try_init() {
                eprintln!("logging already initialised: {err}");
            }
        }
        Err(err) => eprintln!("failed to create logcat layer: {err}"),
    }
}

#[cfg(not(target_os = "android"))]
fn install_subscriber() {
    // Another subscriber may already be installed by the host or a test
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn test_root_reexports() {
        assert_eq!(total_rows(20.0, 7.5), 32);
        assert_eq!(validate_seed_weight("2"), Some(2.0));
    }
}
