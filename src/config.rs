//! Configuration management for deployment-specific settings
//!
//! This module provides runtime configuration loading from JSON files, so a
//! deployment can change its turn options or default drill settings without
//! recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calibration::turns::DEFAULT_TURN_OPTIONS;
use crate::calibration::TurnOptions;
use crate::settings::SettingsText;

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub defaults: DefaultSettingsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Calibration screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Turn counts offered by the picker; the first one is preselected
    pub turn_options: Vec<u32>,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            turn_options: DEFAULT_TURN_OPTIONS.to_vec(),
        }
    }
}

/// Text prefilled in the configuration form when nothing is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSettingsConfig {
    /// Drill width in feet
    pub drill_width: String,
    /// Row spacing in inches
    pub row_spacing: String,
    /// Distance per turn in inches
    pub distance_per_turn: String,
}

impl Default for DefaultSettingsConfig {
    fn default() -> Self {
        Self {
            drill_width: "20".to_string(),
            row_spacing: "7.5".to_string(),
            distance_per_turn: "86".to_string(),
        }
    }
}

/// Settings persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding the drill settings (desktop/CLI builds)
    pub settings_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from("drill_settings.json"),
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration. If the file doesn't exist, the JSON is
    /// invalid or the values fail validation, returns the default config.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                        config
                    }
                    Err(reason) => {
                        log::warn!(
                            "[Config] Invalid configuration in {:?}: {}. Using defaults.",
                            path.as_ref(),
                            reason
                        );
                        Self::default()
                    }
                },
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Check values serde cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.calibration.turn_options.is_empty() {
            return Err("calibration.turn_options must not be empty".to_string());
        }
        if self.calibration.turn_options.contains(&0) {
            return Err("calibration.turn_options must not contain 0".to_string());
        }
        Ok(())
    }

    /// Turn option set for calibration sessions
    pub fn turn_options(&self) -> TurnOptions {
        TurnOptions::new(&self.calibration.turn_options).unwrap_or_default()
    }

    /// Default form text for the settings store
    pub fn default_settings(&self) -> SettingsText {
        SettingsText::new(
            self.defaults.drill_width.as_str(),
            self.defaults.row_spacing.as_str(),
            self.defaults.distance_per_turn.as_str(),
        )
    }
}
