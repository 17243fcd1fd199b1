//! Scoped access to the library table.
//!
//! Both guards finalize exactly once: explicitly through `commit`, or on drop
//! when the scope is left early by `?` or a panic.

use crate::error::Result;

use super::table::{LibraryTable, RootKind};

/// An open modifiable transaction on the library table
pub struct TableTransaction<'t> {
    table: &'t mut dyn LibraryTable,
    finalized: bool,
}

impl<'t> TableTransaction<'t> {
    pub fn begin(table: &'t mut dyn LibraryTable) -> Result<Self> {
        table.begin_transaction()?;
        Ok(Self {
            table,
            finalized: false,
        })
    }

    pub fn create_library(&mut self, name: &str) -> Result<()> {
        self.table.create_library(name)
    }

    pub fn remove_library(&mut self, name: &str) -> Result<()> {
        self.table.remove_library(name)
    }

    /// Open the modification scope of a single library
    pub fn edit_library(&mut self, name: &str) -> Result<LibraryEdit<'_>> {
        LibraryEdit::begin(&mut *self.table, name)
    }

    pub fn commit(mut self) -> Result<()> {
        self.finalized = true;
        self.table.commit()
    }
}

impl Drop for TableTransaction<'_> {
    fn drop(&mut self) {
        if !self.finalized {
            self.finalized = true;
            if let Err(e) = self.table.commit() {
                tracing::error!("Failed to commit library table transaction: {}", e);
            }
        }
    }
}

/// An open modification scope on one library's roots
pub struct LibraryEdit<'t> {
    table: &'t mut dyn LibraryTable,
    name: String,
    finalized: bool,
}

impl<'t> LibraryEdit<'t> {
    pub fn begin(table: &'t mut dyn LibraryTable, name: &str) -> Result<Self> {
        table.begin_library_edit(name)?;
        Ok(Self {
            table,
            name: name.to_string(),
            finalized: false,
        })
    }

    pub fn urls(&self, kind: RootKind) -> Result<Vec<String>> {
        self.table.root_urls(&self.name, kind)
    }

    pub fn add_root(&mut self, url: &str, kind: RootKind) -> Result<()> {
        self.table.add_root(&self.name, url, kind)
    }

    pub fn remove_root(&mut self, url: &str, kind: RootKind) -> Result<()> {
        self.table.remove_root(&self.name, url, kind)
    }

    /// Remove every class and source root, returning how many were removed
    pub fn clear_roots(&mut self) -> Result<usize> {
        let mut removed = 0;
        for kind in RootKind::ALL {
            for url in self.urls(kind)? {
                self.remove_root(&url, kind)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn commit(mut self) -> Result<()> {
        self.finalized = true;
        self.table.commit_library_edit(&self.name)
    }
}

impl Drop for LibraryEdit<'_> {
    fn drop(&mut self) {
        if !self.finalized {
            self.finalized = true;
            if let Err(e) = self.table.commit_library_edit(&self.name) {
                tracing::error!("Failed to commit edit of library {}: {}", self.name, e);
            }
        }
    }
}
