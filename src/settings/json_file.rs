// JSON file settings store for desktop builds and the CLI
//
// All keys live in one flat JSON object. Writes go to a sibling temp file
// which is then renamed over the original, so a failed write leaves the
// previous settings intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SettingsError;
use crate::settings::SettingsStore;

type SettingsMap = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<SettingsMap, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(SettingsMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("[Settings] {:?} does not exist yet", self.path);
                Ok(SettingsMap::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write_map(&self, map: &SettingsMap) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(map)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), SettingsError> {
        let mut map = self.read_map()?;
        for (key, value) in entries {
            map.insert(key.to_string(), value.clone());
        }
        self.write_map(&map)
    }
}
