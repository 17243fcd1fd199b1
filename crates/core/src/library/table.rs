//! The library table port.
//!
//! The host environment owns the library table; this crate only reaches it
//! through [`LibraryTable`], so the reconciler can run against the in-memory
//! adapter in tests and against any host store in production.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which root set of a library an URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootKind {
    Classes,
    Sources,
}

impl RootKind {
    pub const ALL: [RootKind; 2] = [RootKind::Classes, RootKind::Sources];
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootKind::Classes => f.write_str("classes"),
            RootKind::Sources => f.write_str("sources"),
        }
    }
}

/// Mutable, host-owned table of named libraries.
///
/// Structural changes (create/remove) require an open transaction; root
/// changes require an open edit on that library. At most one transaction may
/// be open at a time.
pub trait LibraryTable {
    /// Names of all libraries currently in the table
    fn library_names(&self) -> Vec<String>;

    fn contains(&self, name: &str) -> bool;

    fn root_urls(&self, name: &str, kind: RootKind) -> Result<Vec<String>>;

    fn create_library(&mut self, name: &str) -> Result<()>;

    fn remove_library(&mut self, name: &str) -> Result<()>;

    fn add_root(&mut self, name: &str, url: &str, kind: RootKind) -> Result<()>;

    fn remove_root(&mut self, name: &str, url: &str, kind: RootKind) -> Result<()>;

    fn begin_transaction(&mut self) -> Result<()>;

    fn commit(&mut self) -> Result<()>;

    fn begin_library_edit(&mut self, name: &str) -> Result<()>;

    fn commit_library_edit(&mut self, name: &str) -> Result<()>;
}
