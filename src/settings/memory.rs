// In-memory settings store, used by tests and as the fallback when no
// persistent store is configured

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::SettingsError;
use crate::settings::SettingsStore;

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_values(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, SettingsError> {
        self.values.lock().map_err(|_| SettingsError::LockPoisoned {
            component: "memory_settings_store".to_string(),
        })
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.lock_values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.lock_values()?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), SettingsError> {
        let mut values = self.lock_values()?;
        for (key, value) in entries {
            values.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get("drill_width").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemorySettingsStore::new();
        store.set("drill_width", "20").unwrap();
        store.set("drill_width", "30").unwrap();
        assert_eq!(store.get("drill_width").unwrap().as_deref(), Some("30"));
    }

    #[test]
    fn test_set_many() {
        let store = MemorySettingsStore::new();
        store
            .set_many(&[("row_spacing", "7.5".to_string()), ("distance_per_turn", "86".to_string())])
            .unwrap();
        assert_eq!(store.get("row_spacing").unwrap().as_deref(), Some("7.5"));
        assert_eq!(store.get("distance_per_turn").unwrap().as_deref(), Some("86"));
    }
}
