//! Build artifacts and their on-disk locations

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file produced or consumed by the build
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactLocation {
    /// Output root for generated artifacts (e.g. `bazel-out/k8-fastbuild/bin`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub root_path: String,
    /// Path relative to the root
    pub relative_path: String,
    /// Source artifacts live in the workspace, generated ones under the execution root
    #[serde(default)]
    pub is_source: bool,
}

impl ArtifactLocation {
    pub fn source(relative_path: impl Into<String>) -> Self {
        Self {
            root_path: String::new(),
            relative_path: relative_path.into(),
            is_source: true,
        }
    }

    pub fn generated(root_path: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            relative_path: relative_path.into(),
            is_source: false,
        }
    }

    /// Path relative to the execution root
    pub fn execution_path(&self) -> PathBuf {
        if self.root_path.is_empty() {
            PathBuf::from(&self.relative_path)
        } else {
            Path::new(&self.root_path).join(&self.relative_path)
        }
    }
}

/// Resolves artifact locations to absolute paths and library root URLs
#[derive(Debug, Clone)]
pub struct ArtifactLocationDecoder {
    workspace_root: PathBuf,
    execution_root: PathBuf,
}

impl ArtifactLocationDecoder {
    pub fn new(workspace_root: impl Into<PathBuf>, execution_root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            execution_root: execution_root.into(),
        }
    }

    pub fn decode(&self, artifact: &ArtifactLocation) -> PathBuf {
        if artifact.is_source {
            self.workspace_root.join(&artifact.relative_path)
        } else {
            self.execution_root.join(artifact.execution_path())
        }
    }

    /// URL of the jar's root entry, as stored in a library's root set
    pub fn jar_url(&self, artifact: &ArtifactLocation) -> String {
        let path = self.decode(artifact);
        format!("jar://{}!/", path.to_string_lossy().replace('\\', "/"))
    }
}
