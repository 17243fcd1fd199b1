//! Library table persisted as a JSON file

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::memory::{InMemoryLibraryTable, LibraryEntry};
use super::table::{LibraryTable, RootKind};

#[derive(Debug, Default, Serialize, Deserialize)]
struct TableFile {
    #[serde(default)]
    libraries: BTreeMap<String, LibraryEntry>,
}

/// A library table backed by a JSON file, rewritten on every commit
#[derive(Debug)]
pub struct JsonLibraryTable {
    path: PathBuf,
    inner: InMemoryLibraryTable,
}

impl JsonLibraryTable {
    /// Open the table at `path`; a missing file is an empty table
    pub fn open(path: &Path) -> Result<Self> {
        let file = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str::<TableFile>(&contents).map_err(|e| {
                Error::ConfigError(format!(
                    "Failed to parse library table {}: {e}",
                    path.display()
                ))
            })?
        } else {
            TableFile::default()
        };

        tracing::debug!(
            "Opened library table {} with {} libraries",
            path.display(),
            file.libraries.len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            inner: InMemoryLibraryTable::from_entries(file.libraries),
        })
    }

    pub fn entries(&self) -> &BTreeMap<String, LibraryEntry> {
        self.inner.entries()
    }

    fn save(&self) -> Result<()> {
        let file = TableFile {
            libraries: self.inner.entries().clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl LibraryTable for JsonLibraryTable {
    fn library_names(&self) -> Vec<String> {
        self.inner.library_names()
    }

    fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    fn root_urls(&self, name: &str, kind: RootKind) -> Result<Vec<String>> {
        self.inner.root_urls(name, kind)
    }

    fn create_library(&mut self, name: &str) -> Result<()> {
        self.inner.create_library(name)
    }

    fn remove_library(&mut self, name: &str) -> Result<()> {
        self.inner.remove_library(name)
    }

    fn add_root(&mut self, name: &str, url: &str, kind: RootKind) -> Result<()> {
        self.inner.add_root(name, url, kind)
    }

    fn remove_root(&mut self, name: &str, url: &str, kind: RootKind) -> Result<()> {
        self.inner.remove_root(name, url, kind)
    }

    fn begin_transaction(&mut self) -> Result<()> {
        self.inner.begin_transaction()
    }

    fn commit(&mut self) -> Result<()> {
        self.inner.commit()?;
        self.save()
    }

    fn begin_library_edit(&mut self, name: &str) -> Result<()> {
        self.inner.begin_library_edit(name)
    }

    fn commit_library_edit(&mut self, name: &str) -> Result<()> {
        self.inner.commit_library_edit(name)
    }
}
