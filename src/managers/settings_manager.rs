// SettingsManager: Focused manager for drill settings persistence
//
// Single Responsibility: Loading, validating and saving the drill settings

use std::sync::{Arc, RwLock};

use crate::calibration::{validate_config, DrillSettings};
use crate::error::{log_input_error, log_settings_error, CalibratorError, SettingsError};
use crate::settings::{load_settings, save_settings, MemorySettingsStore, SettingsStore, SettingsText};

/// Owns the settings store and the form defaults
///
/// The store can be swapped at runtime so the host can point it at its
/// documents directory once that path is known.
pub struct SettingsManager {
    store: RwLock<Arc<dyn SettingsStore>>,
    defaults: SettingsText,
}

impl SettingsManager {
    pub fn new(store: Arc<dyn SettingsStore>, defaults: SettingsText) -> Self {
        Self {
            store: RwLock::new(store),
            defaults,
        }
    }

    /// Manager backed by an in-memory store
    pub fn in_memory(defaults: SettingsText) -> Self {
        Self::new(Arc::new(MemorySettingsStore::new()), defaults)
    }

    pub fn defaults(&self) -> &SettingsText {
        &self.defaults
    }

    /// Replace the backing store
    pub fn replace_store(&self, store: Arc<dyn SettingsStore>) -> Result<(), SettingsError> {
        let mut guard = self.store.write().map_err(|_| SettingsError::LockPoisoned {
            component: "settings_store".to_string(),
        })?;
        *guard = store;
        Ok(())
    }

    /// Stored settings text layered over the defaults
    pub fn load(&self) -> Result<SettingsText, SettingsError> {
        let store = self.current_store()?;
        load_settings(store.as_ref(), &self.defaults)
    }

    /// Stored settings text, or the defaults if the store cannot be read
    ///
    /// The failure is logged; the configuration form still opens.
    pub fn load_or_defaults(&self) -> SettingsText {
        match self.load() {
            Ok(text) => text,
            Err(err) => {
                log::warn!(
                    "[SettingsManager] Falling back to default settings: {}",
                    err
                );
                self.defaults.clone()
            }
        }
    }

    /// Stored settings, validated for a calibration session
    pub fn load_validated(&self) -> Result<DrillSettings, CalibratorError> {
        let text = self.load()?;
        let settings = validate_config(&text.drill_width, &text.row_spacing, &text.distance_per_turn)
            .inspect_err(|err| log_input_error(err, "load_validated"))?;
        Ok(settings)
    }

    /// Persist already validated settings
    pub fn save(&self, settings: &DrillSettings) -> Result<(), SettingsError> {
        let store = self.current_store()?;
        save_settings(store.as_ref(), settings)
    }

    /// Validate the configuration form and persist it
    ///
    /// Nothing is written unless every field validates.
    pub fn validate_and_save(&self, form: &SettingsText) -> Result<DrillSettings, CalibratorError> {
        let settings = validate_config(&form.drill_width, &form.row_spacing, &form.distance_per_turn)
            .inspect_err(|err| log_input_error(err, "validate_and_save"))?;
        self.save(&settings)?;
        Ok(settings)
    }

    fn current_store(&self) -> Result<Arc<dyn SettingsStore>, SettingsError> {
        self.store
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| {
                let err = SettingsError::LockPoisoned {
                    component: "settings_store".to_string(),
                };
                log_settings_error(&err, "current_store");
                err
            })
    }
}
