// Settings persistence - drill settings as key/value decimal strings
//
// The three drill settings live in a plain key/value store under fixed
// keys. Values are decimal strings with no schema versioning, so a store
// written by any earlier build reads back unchanged.

mod json_file;
mod memory;

pub use json_file::JsonFileSettingsStore;
pub use memory::MemorySettingsStore;

use log::{debug, info};

use crate::calibration::geometry::DrillSettings;
use crate::error::{log_settings_error, SettingsError};

/// Storage key for drill width (feet)
pub const DRILL_WIDTH_KEY: &str = "drill_width";

/// Storage key for row spacing (inches)
pub const ROW_SPACING_KEY: &str = "row_spacing";

/// Storage key for distance per turn (inches)
pub const DISTANCE_PER_TURN_KEY: &str = "distance_per_turn";

/// One of the persisted drill settings fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SettingField {
    DrillWidth,
    RowSpacing,
    DistancePerTurn,
}

impl SettingField {
    pub const ALL: [SettingField; 3] = [
        SettingField::DrillWidth,
        SettingField::RowSpacing,
        SettingField::DistancePerTurn,
    ];

    /// Key used in the settings store
    pub fn key(&self) -> &'static str {
        match self {
            SettingField::DrillWidth => DRILL_WIDTH_KEY,
            SettingField::RowSpacing => ROW_SPACING_KEY,
            SettingField::DistancePerTurn => DISTANCE_PER_TURN_KEY,
        }
    }

    /// Human-readable name for messages
    pub fn label(&self) -> &'static str {
        match self {
            SettingField::DrillWidth => "Drill width",
            SettingField::RowSpacing => "Row spacing",
            SettingField::DistancePerTurn => "Distance per turn",
        }
    }
}

/// Key/value persistence for drill settings
///
/// Implementations only move strings; validation happens before `set` and
/// after `get`.
pub trait SettingsStore: Send + Sync {
    /// Read a value, `Ok(None)` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Write a value
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Write several values at once
    ///
    /// The default writes keys one by one; stores that can commit in one
    /// step should override it.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), SettingsError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Drill settings as text, the way the configuration form edits them
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SettingsText {
    pub drill_width: String,
    pub row_spacing: String,
    pub distance_per_turn: String,
}

impl SettingsText {
    pub fn new(
        drill_width: impl Into<String>,
        row_spacing: impl Into<String>,
        distance_per_turn: impl Into<String>,
    ) -> Self {
        Self {
            drill_width: drill_width.into(),
            row_spacing: row_spacing.into(),
            distance_per_turn: distance_per_turn.into(),
        }
    }

    /// Normalized decimal text for validated settings
    pub fn from_settings(settings: &DrillSettings) -> Self {
        Self {
            drill_width: format_decimal(settings.drill.width_feet),
            row_spacing: format_decimal(settings.drill.row_spacing_inches),
            distance_per_turn: format_decimal(settings.distance_per_turn_inches),
        }
    }

    pub fn field(&self, field: SettingField) -> &str {
        match field {
            SettingField::DrillWidth => &self.drill_width,
            SettingField::RowSpacing => &self.row_spacing,
            SettingField::DistancePerTurn => &self.distance_per_turn,
        }
    }

    fn field_mut(&mut self, field: SettingField) -> &mut String {
        match field {
            SettingField::DrillWidth => &mut self.drill_width,
            SettingField::RowSpacing => &mut self.row_spacing,
            SettingField::DistancePerTurn => &mut self.distance_per_turn,
        }
    }
}

/// Shortest decimal text that reads back as the same value ("20", "7.5")
///
/// Saved settings go through this, so form text like "7.50" or "1.2.3" is
/// stored as the number it was read as ("7.5", "1.2").
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}

/// Overlay stored values onto `defaults`
///
/// Keys that were never written (or hold an empty string) keep the
/// default text.
pub fn load_settings(
    store: &dyn SettingsStore,
    defaults: &SettingsText,
) -> Result<SettingsText, SettingsError> {
    let mut text = defaults.clone();
    for field in SettingField::ALL {
        match store.get(field.key()).inspect_err(|err| {
            log_settings_error(err, "load_settings");
        })? {
            Some(value) if !value.is_empty() => *text.field_mut(field) = value,
            _ => debug!("[Settings] {} not stored, keeping default", field.key()),
        }
    }
    Ok(text)
}

/// Persist validated settings under the three storage keys
///
/// `settings` is borrowed, so the caller still holds the values if the
/// write fails.
pub fn save_settings(
    store: &dyn SettingsStore,
    settings: &DrillSettings,
) -> Result<(), SettingsError> {
    let text = SettingsText::from_settings(settings);
    let entries: Vec<(&str, String)> = SettingField::ALL
        .iter()
        .map(|field| (field.key(), text.field(*field).to_string()))
        .collect();

    store.set_many(&entries).inspect_err(|err| {
        log_settings_error(err, "save_settings");
    })?;

    info!(
        "[Settings] Saved width={} spacing={} distance_per_turn={}",
        text.drill_width, text.row_spacing, text.distance_per_turn
    );
    Ok(())
}
