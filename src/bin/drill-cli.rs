use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drill_calibrator::api::types::SessionSnapshot;
use drill_calibrator::calibration::{validate_config, CalibrationSession, SettingsSummary};
use drill_calibrator::config::AppConfig;
use drill_calibrator::context::AppContext;
use drill_calibrator::error::{CalibratorError, ErrorCode, InputError};
use drill_calibrator::settings::{JsonFileSettingsStore, SettingsText};
use serde_json::json;

#[derive(Parser, Debug)]
#[command(
    name = "drill-cli",
    about = "Seed drill calibration calculator",
    version
)]
struct Cli {
    /// JSON file holding the drill settings (defaults to the config's storage path)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// App configuration file (turn options, default settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print how many seed rows a drill has
    Rows {
        /// Drill width in feet
        #[arg(long)]
        width: f64,
        /// Row spacing in inches
        #[arg(long)]
        spacing: f64,
    },
    /// Validate and save the drill settings
    Configure {
        #[arg(long)]
        width: String,
        #[arg(long)]
        spacing: String,
        #[arg(long)]
        distance: String,
    },
    /// Print the stored drill settings
    Show,
    /// Compute the seeding rate for one calibration run
    Rate {
        /// Crank turns, one of the configured turn options
        #[arg(long)]
        turns: u32,
        /// Rows caught during the run
        #[arg(long)]
        rows: String,
        /// Seed weight caught, in pounds
        #[arg(long)]
        weight: String,
        /// Override the stored drill width (feet)
        #[arg(long)]
        width: Option<String>,
        /// Override the stored row spacing (inches)
        #[arg(long)]
        spacing: Option<String>,
        /// Override the stored distance per turn (inches)
        #[arg(long)]
        distance: Option<String>,
    },
}

fn main() -> ExitCode {
    drill_calibrator::init_logging();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "drill-cli invoked");

    let config = cli
        .config
        .as_ref()
        .map(AppConfig::load_from_file)
        .unwrap_or_default();
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| config.storage.settings_path.clone());
    let ctx = AppContext::with_store(config, Arc::new(JsonFileSettingsStore::new(settings_path)));

    match cli.command {
        Commands::Rows { width, spacing } => run_rows(width, spacing, cli.json),
        Commands::Configure {
            width,
            spacing,
            distance,
        } => run_configure(&ctx, SettingsText::new(width, spacing, distance), cli.json),
        Commands::Show => run_show(&ctx, cli.json),
        Commands::Rate {
            turns,
            rows,
            weight,
            width,
            spacing,
            distance,
        } => {
            let mut text = ctx.load_settings();
            if let Some(width) = width {
                text.drill_width = width;
            }
            if let Some(spacing) = spacing {
                text.row_spacing = spacing;
            }
            if let Some(distance) = distance {
                text.distance_per_turn = distance;
            }
            run_rate(&ctx, &text, turns, &rows, &weight, cli.json)
        }
    }
}

fn run_rows(width: f64, spacing: f64, as_json: bool) -> Result<ExitCode> {
    let rows = drill_calibrator::total_rows(width, spacing);
    if as_json {
        println!(
            "{}",
            serde_json::to_string(&json!({ "total_rows": rows }))?
        );
    } else {
        println!("{rows}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_configure(ctx: &AppContext, form: SettingsText, as_json: bool) -> Result<ExitCode> {
    let settings = match ctx.save_settings(&form) {
        Ok(settings) => settings,
        Err(CalibratorError::Input(err)) => return Ok(input_failure(&err)),
        Err(err) => return Err(err).context("saving drill settings"),
    };

    let summary = SettingsSummary::from_settings(&settings);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Settings saved");
        println!("{summary}");
    }
    Ok(ExitCode::SUCCESS)
}

fn run_show(ctx: &AppContext, as_json: bool) -> Result<ExitCode> {
    let text = ctx.load_settings();
    let summary = validate_config(&text.drill_width, &text.row_spacing, &text.distance_per_turn)
        .ok()
        .map(|settings| SettingsSummary::from_settings(&settings));

    if as_json {
        let payload = json!({ "settings": text, "summary": summary });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(ExitCode::SUCCESS);
    }

    match summary {
        Some(summary) => println!("{summary}"),
        None => {
            println!("Width: {} feet", text.drill_width);
            println!("Spacing: {} inches", text.row_spacing);
            println!("Distance/Turn: {} inches", text.distance_per_turn);
            println!("(stored settings are not valid; run `configure`)");
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_rate(
    ctx: &AppContext,
    text: &SettingsText,
    turns: u32,
    rows: &str,
    weight: &str,
    as_json: bool,
) -> Result<ExitCode> {
    let settings =
        match validate_config(&text.drill_width, &text.row_spacing, &text.distance_per_turn) {
            Ok(settings) => settings,
            Err(err) => return Ok(input_failure(&err)),
        };

    let options = ctx.turn_options();
    if options.select(turns).is_none() {
        eprintln!(
            "Error: turns must be one of {:?}, got {}",
            options.values(),
            turns
        );
        return Ok(ExitCode::from(2));
    }

    let mut session = CalibrationSession::new(settings, options);
    session.select_turns(turns);
    if let Err(err) = session.set_rows_caught(rows) {
        return Ok(input_failure(&err));
    }
    session.set_seed_weight(weight);

    let snapshot = SessionSnapshot::from_session(&session);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot.rate);
    }
    Ok(ExitCode::SUCCESS)
}

fn input_failure(err: &InputError) -> ExitCode {
    eprintln!("Error: {} (code {})", err.message(), err.code());
    ExitCode::from(2)
}
