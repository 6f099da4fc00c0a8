use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_drill-cli"))
}

fn settings_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "drill-cli-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn rows_prints_total_rows() {
    let output = cli()
        .args(["rows", "--width", "20", "--spacing", "7.5"])
        .output()
        .expect("rows command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    assert_eq!(stdout.trim(), "32");
}

#[test]
fn rate_with_defaults_outputs_json() {
    let path = settings_file("defaults");

    let output = cli()
        .args(["--settings", path.to_str().unwrap(), "--json"])
        .args(["rate", "--turns", "10", "--rows", "4", "--weight", "2.0"])
        .output()
        .expect("rate command");

    assert!(
        output.status.success(),
        "rate exited with {:?}",
        output.status.code()
    );
    let payload: Value = serde_json::from_slice(&output.stdout).expect("json payload");
    assert_eq!(payload["pounds_per_acre"], 486.3);
    assert_eq!(payload["rate"]["status"], "rate");
    assert_eq!(payload["summary"]["total_rows"], 32);
}

#[test]
fn configure_then_rate_uses_saved_settings() {
    let path = settings_file("configure");

    let output = cli()
        .args(["--settings", path.to_str().unwrap()])
        .args(["configure", "--width", "30", "--spacing", "7.5", "--distance", "90"])
        .output()
        .expect("configure command");
    assert!(output.status.success());

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("settings file"))
            .expect("settings json");
    assert_eq!(stored["drill_width"], "30");
    assert_eq!(stored["row_spacing"], "7.5");
    assert_eq!(stored["distance_per_turn"], "90");

    let output = cli()
        .args(["--settings", path.to_str().unwrap()])
        .args(["rate", "--turns", "20", "--rows", "6", "--weight", "3.5"])
        .output()
        .expect("rate command");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout utf8");
    assert_eq!(stdout.trim(), "271 lbs/acre");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn invalid_configuration_exits_with_two() {
    let path = settings_file("invalid");

    let output = cli()
        .args(["--settings", path.to_str().unwrap()])
        .args(["configure", "--width", "20", "--spacing", "0.4", "--distance", "86"])
        .output()
        .expect("configure command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    assert!(stderr.contains("code 1005"), "unexpected stderr: {stderr}");
    assert!(!path.exists());
}

#[test]
fn rows_above_capacity_exit_with_two() {
    let path = settings_file("capacity");

    let output = cli()
        .args(["--settings", path.to_str().unwrap()])
        .args(["rate", "--turns", "10", "--rows", "33", "--weight", "2"])
        .output()
        .expect("rate command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("stderr utf8");
    assert!(stderr.contains("Cannot catch more than 32 rows"));
}

#[test]
fn turns_outside_options_exit_with_two() {
    let path = settings_file("turns");

    let output = cli()
        .args(["--settings", path.to_str().unwrap()])
        .args(["rate", "--turns", "7", "--rows", "4", "--weight", "2"])
        .output()
        .expect("rate command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn show_reports_defaults_for_missing_file() {
    let path = settings_file("show");

    let output = cli()
        .args(["--settings", path.to_str().unwrap(), "--json", "show"])
        .output()
        .expect("show command");

    assert!(output.status.success());
    let payload: Value = serde_json::from_slice(&output.stdout).expect("json payload");
    assert_eq!(payload["settings"]["drill_width"], "20");
    assert_eq!(payload["summary"]["total_rows"], 32);
}

#[test]
fn overrides_take_precedence_over_stored_settings() {
    let path = settings_file("override");

    let output = cli()
        .args(["--settings", path.to_str().unwrap()])
        .args([
            "rate", "--turns", "10", "--rows", "4", "--weight", "2", "--width", "10",
        ])
        .output()
        .expect("rate command");

    assert!(output.status.success());
    // Width override only changes geometry; nothing is written
    assert!(!path.exists());
}
