//! In-memory library table

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::table::{LibraryTable, RootKind};

/// Root sets of one library, each an insertion-ordered set of URLs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl LibraryEntry {
    fn roots(&self, kind: RootKind) -> &Vec<String> {
        match kind {
            RootKind::Classes => &self.classes,
            RootKind::Sources => &self.sources,
        }
    }

    fn roots_mut(&mut self, kind: RootKind) -> &mut Vec<String> {
        match kind {
            RootKind::Classes => &mut self.classes,
            RootKind::Sources => &mut self.sources,
        }
    }
}

/// Library table held in memory.
///
/// Enforces the same transaction discipline a host store would and counts
/// commits, which makes it the test double for the reconciler.
#[derive(Debug, Default)]
pub struct InMemoryLibraryTable {
    libraries: BTreeMap<String, LibraryEntry>,
    transaction_open: bool,
    open_edits: BTreeSet<String>,
    commit_count: usize,
    library_commit_count: usize,
}

impl InMemoryLibraryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(libraries: BTreeMap<String, LibraryEntry>) -> Self {
        Self {
            libraries,
            ..Default::default()
        }
    }

    /// Seed a library without going through a transaction
    pub fn with_library(mut self, name: &str, classes: &[&str], sources: &[&str]) -> Self {
        self.libraries.insert(
            name.to_string(),
            LibraryEntry {
                classes: classes.iter().map(|s| s.to_string()).collect(),
                sources: sources.iter().map(|s| s.to_string()).collect(),
            },
        );
        self
    }

    pub fn library(&self, name: &str) -> Option<&LibraryEntry> {
        self.libraries.get(name)
    }

    pub fn entries(&self) -> &BTreeMap<String, LibraryEntry> {
        &self.libraries
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }

    pub fn is_transaction_open(&self) -> bool {
        self.transaction_open
    }

    pub fn is_editing(&self, name: &str) -> bool {
        self.open_edits.contains(name)
    }

    /// Number of finalized table transactions
    pub fn commit_count(&self) -> usize {
        self.commit_count
    }

    /// Number of finalized per-library edits
    pub fn library_commit_count(&self) -> usize {
        self.library_commit_count
    }

    fn require_transaction(&self) -> Result<()> {
        if self.transaction_open {
            Ok(())
        } else {
            Err(Error::NoTransaction)
        }
    }

    fn editable_entry(&mut self, name: &str) -> Result<&mut LibraryEntry> {
        if !self.open_edits.contains(name) {
            return Err(Error::LibraryNotEditable(name.to_string()));
        }
        self.libraries
            .get_mut(name)
            .ok_or_else(|| Error::LibraryNotFound(name.to_string()))
    }
}

impl LibraryTable for InMemoryLibraryTable {
    fn library_names(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.libraries.contains_key(name)
    }

    fn root_urls(&self, name: &str, kind: RootKind) -> Result<Vec<String>> {
        self.libraries
            .get(name)
            .map(|entry| entry.roots(kind).clone())
            .ok_or_else(|| Error::LibraryNotFound(name.to_string()))
    }

    fn create_library(&mut self, name: &str) -> Result<()> {
        self.require_transaction()?;
        if self.libraries.contains_key(name) {
            return Err(Error::LibraryExists(name.to_string()));
        }
        self.libraries.insert(name.to_string(), LibraryEntry::default());
        Ok(())
    }

    fn remove_library(&mut self, name: &str) -> Result<()> {
        self.require_transaction()?;
        self.libraries
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::LibraryNotFound(name.to_string()))?;
        self.open_edits.remove(name);
        Ok(())
    }

    fn add_root(&mut self, name: &str, url: &str, kind: RootKind) -> Result<()> {
        let roots = self.editable_entry(name)?.roots_mut(kind);
        if !roots.iter().any(|existing| existing == url) {
            roots.push(url.to_string());
        }
        Ok(())
    }

    fn remove_root(&mut self, name: &str, url: &str, kind: RootKind) -> Result<()> {
        let roots = self.editable_entry(name)?.roots_mut(kind);
        roots.retain(|existing| existing != url);
        Ok(())
    }

    fn begin_transaction(&mut self) -> Result<()> {
        if self.transaction_open {
            return Err(Error::TransactionAlreadyOpen);
        }
        self.transaction_open = true;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.require_transaction()?;
        self.transaction_open = false;
        self.commit_count += 1;
        Ok(())
    }

    fn begin_library_edit(&mut self, name: &str) -> Result<()> {
        if !self.libraries.contains_key(name) {
            return Err(Error::LibraryNotFound(name.to_string()));
        }
        self.open_edits.insert(name.to_string());
        Ok(())
    }

    fn commit_library_edit(&mut self, name: &str) -> Result<()> {
        if !self.open_edits.remove(name) {
            return Err(Error::LibraryNotEditable(name.to_string()));
        }
        self.library_commit_count += 1;
        Ok(())
    }
}
