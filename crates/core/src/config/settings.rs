use crate::{
    error::{Error, Result},
    library::ArtifactLocationDecoder,
    ownership::SyncAugmenter,
    wire::EXTERNAL_MODULE_PREFIX,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-workspace sync configuration, read from `.blaze-libsync.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SyncConfig {
    /// Root of the source workspace (default: directory of the config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Bazel execution root that generated artifacts resolve against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_root: Option<PathBuf>,

    /// Name prefix of modules holding externally sourced code
    pub external_module_prefix: String,

    /// Wire external modules ahead of libraries
    pub wire_external_modules: bool,

    /// Libraries maintained by other tooling that sync must never remove
    pub externally_added_libraries: Vec<String>,

    // Directory the config was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            execution_root: None,
            external_module_prefix: EXTERNAL_MODULE_PREFIX.to_string(),
            wire_external_modules: false,
            externally_added_libraries: Vec::new(),
            config_dir: None,
        }
    }
}

impl SyncConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: SyncConfig = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.config_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` to the nearest config file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".blaze-libsync.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("blaze-libsync.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config above `start_path`, or the defaults
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Using config file: {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No config file found above {:?}", start_path);
                Ok(Self::default())
            }
        }
    }

    pub fn resolved_workspace_root(&self) -> PathBuf {
        self.workspace_root
            .clone()
            .or_else(|| self.config_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolved_execution_root(&self) -> PathBuf {
        self.execution_root
            .clone()
            .unwrap_or_else(|| self.resolved_workspace_root())
    }

    pub fn artifact_decoder(&self) -> ArtifactLocationDecoder {
        ArtifactLocationDecoder::new(self.resolved_workspace_root(), self.resolved_execution_root())
    }
}

impl SyncAugmenter for SyncConfig {
    fn externally_added_libraries(&self) -> Vec<String> {
        self.externally_added_libraries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config: SyncConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.external_module_prefix, "external-");
        assert!(!config.wire_external_modules);
        assert!(config.externally_added_libraries.is_empty());
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("java").join("com").join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(".blaze-libsync.json"),
            r#"{ "execution_root": "/exec", "externally_added_libraries": ["android-sdk"] }"#,
        )
        .unwrap();

        let found = SyncConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join(".blaze-libsync.json"));

        let config = SyncConfig::discover(&nested).unwrap();
        assert_eq!(config.execution_root, Some(PathBuf::from("/exec")));
        assert_eq!(config.resolved_workspace_root(), temp_dir.path());
        assert_eq!(config.externally_added_libraries(), vec!["android-sdk"]);
    }

    #[test]
    fn test_nearest_config_wins() {
        let temp_dir = TempDir::new().unwrap();
        let middle = temp_dir.path().join("java");
        let deepest = middle.join("com").join("app");
        fs::create_dir_all(&deepest).unwrap();
        fs::write(
            temp_dir.path().join(".blaze-libsync.json"),
            r#"{ "external_module_prefix": "top-" }"#,
        )
        .unwrap();
        fs::write(
            middle.join("blaze-libsync.json"),
            r#"{ "external_module_prefix": "mid-" }"#,
        )
        .unwrap();

        let config = SyncConfig::discover(&deepest).unwrap();
        assert_eq!(config.external_module_prefix, "mid-");
        assert_eq!(config.config_dir, Some(middle.clone()));
        assert!(!config.wire_external_modules);

        // The dotted name is preferred within one directory.
        fs::write(
            middle.join(".blaze-libsync.json"),
            r#"{ "wire_external_modules": true }"#,
        )
        .unwrap();
        let found = SyncConfig::find_config_file(&deepest).unwrap();
        assert_eq!(found, middle.join(".blaze-libsync.json"));
        let config = SyncConfig::discover(&deepest).unwrap();
        assert_eq!(config.external_module_prefix, "external-");
        assert!(config.wire_external_modules);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blaze-libsync.json");
        let config = SyncConfig {
            workspace_root: Some(PathBuf::from("/ws")),
            wire_external_modules: true,
            ..Default::default()
        };

        config.save_to_file(&path).unwrap();
        let loaded = SyncConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.workspace_root, Some(PathBuf::from("/ws")));
        assert!(loaded.wire_external_modules);
        assert_eq!(loaded.resolved_execution_root(), PathBuf::from("/ws"));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blaze-libsync.json");
        fs::write(&path, "{ \"wire_external_modules\": \"yes\" }").unwrap();

        let result = SyncConfig::load_from_file(&path);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
