use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File the global settings are stored in
pub const GLOBAL_SETTINGS_FILE: &str = "blaze-libsync.global.json";

/// Settings shared by every workspace on this machine.
///
/// Only kept so that files written by older releases keep loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct GlobalSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    local_sdk_location: Option<String>,
}

impl GlobalSettings {
    /// Load settings from `dir`; a missing file yields the defaults
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_from_file(&dir.join(GLOBAL_SETTINGS_FILE))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse global settings: {e}")))
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        self.save_to_file(&dir.join(GLOBAL_SETTINGS_FILE))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize global settings: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    #[deprecated(note = "the SDK location now comes from the project configuration")]
    pub fn local_sdk_location(&self) -> Option<&str> {
        self.local_sdk_location.as_deref()
    }

    #[deprecated(note = "the SDK location now comes from the project configuration")]
    pub fn set_local_sdk_location(&mut self, location: Option<String>) {
        self.local_sdk_location = location;
    }
}
