//! Integration tests for the calibration workflow
//!
//! These tests drive the whole Rust layer through `AppContext` the way the
//! mobile shell does:
//! - Configuration form load, validation and save to a JSON settings file
//! - Calibration session start from the stored settings
//! - Field edits, rejected edits and the snapshot broadcast

use std::sync::Arc;

use drill_calibrator::calibration::RateResult;
use drill_calibrator::config::AppConfig;
use drill_calibrator::context::AppContext;
use drill_calibrator::error::{CalibratorError, ErrorCode, InputError};
use drill_calibrator::settings::{JsonFileSettingsStore, SettingField, SettingsText};

fn settings_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "drill-calibrator-{}-{}.json",
        name,
        std::process::id()
    ))
}

fn file_context(path: &std::path::Path) -> AppContext {
    AppContext::with_store(
        AppConfig::default(),
        Arc::new(JsonFileSettingsStore::new(path)),
    )
}

/// Configure, persist, reopen and calibrate
///
/// Test steps:
/// 1. Fresh store prefills the defaults
/// 2. Save a new configuration
/// 3. A second context on the same file reads it back
/// 4. Enter a run and get the rate
#[test]
fn test_configure_then_calibrate() {
    let path = settings_path("configure");
    let _ = std::fs::remove_file(&path);

    let context = file_context(&path);
    assert_eq!(
        context.load_settings(),
        SettingsText::new("20", "7.5", "86")
    );

    context
        .save_settings(&SettingsText::new("30 ft", "7.5", "90"))
        .unwrap();

    let reopened = file_context(&path);
    assert_eq!(
        reopened.load_settings(),
        SettingsText::new("30", "7.5", "90")
    );

    let snapshot = reopened.start_session().unwrap();
    assert_eq!(snapshot.rows_hint, "Max 48 rows");
    assert_eq!(snapshot.rate, RateResult::Incomplete);

    reopened.select_turns(20).unwrap();
    reopened.set_rows_caught("6").unwrap();
    let snapshot = reopened.set_seed_weight("3.5").unwrap();
    assert_eq!(snapshot.rate, RateResult::Rate(271.0));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_invalid_configuration_is_not_saved() {
    let path = settings_path("invalid");
    let _ = std::fs::remove_file(&path);

    let context = file_context(&path);
    let err = context
        .save_settings(&SettingsText::new("20", "240", "86"))
        .unwrap_err();

    assert!(matches!(
        err,
        CalibratorError::Input(InputError::SpacingOutOfRange { .. })
    ));
    assert_eq!(err.code(), 1005);
    assert!(!path.exists());
}

#[test]
fn test_spacing_equal_to_width_is_rejected() {
    let context = AppContext::new();
    let err = context
        .save_settings(&SettingsText::new("2", "24", "86"))
        .unwrap_err();

    assert_eq!(
        err,
        CalibratorError::Input(InputError::SpacingExceedsWidth {
            spacing: 24.0,
            width_inches: 24.0
        })
    );
}

#[test]
fn test_blank_field_is_reported_by_name() {
    let context = AppContext::new();
    let err = context
        .save_settings(&SettingsText::new("20", "7.5", " "))
        .unwrap_err();

    assert_eq!(
        err,
        CalibratorError::Input(InputError::EmptyField {
            field: SettingField::DistancePerTurn
        })
    );
    assert_eq!(err.message(), "Distance per turn is required");
}

/// Rows above capacity are rejected and the earlier value survives
#[test]
fn test_rejected_rows_keep_rate() {
    let context = AppContext::new();
    context.start_session().unwrap();
    context.select_turns(10).unwrap();
    context.set_rows_caught("4").unwrap();
    let before = context.set_seed_weight("2.0").unwrap();
    assert_eq!(before.rate, RateResult::Rate(486.3));

    let err = context.set_rows_caught("33").unwrap_err();
    assert_eq!(
        err.message(),
        "Cannot catch more than 32 rows based on current settings"
    );
    assert_eq!(context.snapshot().unwrap(), before);
}

#[test]
fn test_blank_inputs_read_zero() {
    let context = AppContext::new();
    context.start_session().unwrap();
    context.set_rows_caught("4").unwrap();

    let snapshot = context.set_seed_weight("").unwrap();
    assert_eq!(snapshot.pounds_per_acre, 0.0);
    assert_eq!(snapshot.rate.to_string(), "0 lbs/acre");
}

#[test]
fn test_listeners_see_recomputed_rate() {
    let context = AppContext::new();
    let mut updates = context.subscribe();

    context.start_session().unwrap();
    context.select_turns(10).unwrap();
    context.set_rows_caught("4").unwrap();
    context.set_seed_weight("2.0").unwrap();

    let mut last = None;
    while let Ok(snapshot) = updates.try_recv() {
        last = Some(snapshot);
    }
    assert_eq!(last.map(|s| s.rate), Some(RateResult::Rate(486.3)));
}

#[test]
fn test_end_session() {
    let context = AppContext::new();
    context.start_session().unwrap();

    assert!(context.end_session().unwrap());
    assert!(context.set_seed_weight("2").is_err());
}
