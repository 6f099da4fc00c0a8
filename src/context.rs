// AppContext: Dependency Injection Container
// Centralizes all global state for testability and clean architecture

use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::api::types::SessionSnapshot;
use crate::calibration::{DrillSettings, TurnOptions};
use crate::config::AppConfig;
use crate::error::{CalibratorError, SettingsError};
use crate::managers::{SessionManager, SettingsManager};
use crate::settings::{JsonFileSettingsStore, SettingsStore, SettingsText};

/// AppContext: Dependency injection container for all application state
///
/// Delegates to focused managers:
/// - SettingsManager: drill settings persistence and validation
/// - SessionManager: the calibration screen session and its update broadcast
pub struct AppContext {
    config: AppConfig,
    settings: SettingsManager,
    session: SessionManager,
}

impl AppContext {
    /// Create a context with the default configuration and an in-memory store
    ///
    /// The host swaps in a persistent store once it knows where to keep it
    /// (see [`AppContext::use_settings_file`]).
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a context from a loaded configuration, still in memory
    pub fn with_config(config: AppConfig) -> Self {
        let settings = SettingsManager::in_memory(config.default_settings());
        Self {
            config,
            settings,
            session: SessionManager::new(),
        }
    }

    /// Create a context backed by an explicit settings store
    pub fn with_store(config: AppConfig, store: Arc<dyn SettingsStore>) -> Self {
        let settings = SettingsManager::new(store, config.default_settings());
        Self {
            config,
            settings,
            session: SessionManager::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn turn_options(&self) -> TurnOptions {
        self.config.turn_options()
    }

    // ========================================================================
    // SETTINGS
    // ========================================================================

    /// Persist settings to a JSON file from now on
    pub fn use_settings_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        log::info!(
            "[AppContext] Using settings file {:?}",
            path.as_ref()
        );
        self.settings
            .replace_store(Arc::new(JsonFileSettingsStore::new(path.as_ref())))
    }

    /// Text to prefill the configuration form with
    pub fn load_settings(&self) -> SettingsText {
        self.settings.load_or_defaults()
    }

    /// Validate and persist the configuration form
    ///
    /// A running session picks up the new settings, keeping its inputs.
    pub fn save_settings(&self, form: &SettingsText) -> Result<DrillSettings, CalibratorError> {
        let settings = self.settings.validate_and_save(form)?;
        if self.session.is_active()? {
            self.session.update_settings(settings)?;
        }
        Ok(settings)
    }

    // ========================================================================
    // CALIBRATION SESSION
    // ========================================================================

    /// Open the calibration screen with the stored settings
    ///
    /// # Errors
    /// - `InputError` - stored settings no longer validate
    /// - `SettingsError` - store unreadable or lock poisoned
    pub fn start_session(&self) -> Result<SessionSnapshot, CalibratorError> {
        let settings = self.settings.load_validated()?;
        Ok(self.session.start(settings, self.turn_options())?)
    }

    /// Close the calibration screen
    pub fn end_session(&self) -> Result<bool, SettingsError> {
        self.session.end()
    }

    pub fn snapshot(&self) -> Result<SessionSnapshot, SettingsError> {
        self.session.snapshot()
    }

    pub fn select_turns(&self, turns: u32) -> Result<SessionSnapshot, SettingsError> {
        self.session.select_turns(turns)
    }

    pub fn set_rows_caught(&self, text: &str) -> Result<SessionSnapshot, CalibratorError> {
        self.session.set_rows_caught(text)
    }

    pub fn set_seed_weight(&self, text: &str) -> Result<SessionSnapshot, SettingsError> {
        self.session.set_seed_weight(text)
    }

    pub fn clear_inputs(&self) -> Result<SessionSnapshot, SettingsError> {
        self.session.clear_inputs()
    }

    /// Receive a snapshot after every session change
    pub fn subscribe(&self) -> broadcast::Receiver<SessionSnapshot> {
        self.session.subscribe()
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
