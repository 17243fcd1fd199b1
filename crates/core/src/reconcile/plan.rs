//! Diff between the library table and the desired library set

use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::library::BlazeLibrary;
use crate::ownership::LibraryOwnership;

/// One change to apply to the library table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "name", rename_all = "snake_case")]
pub enum StoreMutation {
    /// The library is missing and gets created, then populated
    Create(String),
    /// The library exists; its roots are cleared and repopulated
    Update(String),
    /// The library is no longer produced by the build and gets removed
    Remove(String),
}

impl fmt::Display for StoreMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreMutation::Create(name) => write!(f, "CREATE {name}"),
            StoreMutation::Update(name) => write!(f, "UPDATE {name}"),
            StoreMutation::Remove(name) => write!(f, "REMOVE {name}"),
        }
    }
}

/// Compute the mutations that bring `current_names` in line with `desired`.
///
/// Creates and updates come first, in desired order, a repeated key counting
/// once. Removals follow in name order and are computed against
/// `current_names` alone, never against a table that was already changed.
/// Libraries the ownership check claims are never removed.
pub fn plan(
    current_names: &BTreeSet<String>,
    desired: &[BlazeLibrary],
    ownership: &dyn LibraryOwnership,
) -> Vec<StoreMutation> {
    let mut mutations = Vec::with_capacity(desired.len());
    let mut desired_names: HashSet<&str> = HashSet::with_capacity(desired.len());

    for library in desired {
        let name = library.key.store_name();
        if !desired_names.insert(name) {
            continue;
        }
        if current_names.contains(name) {
            mutations.push(StoreMutation::Update(name.to_string()));
        } else {
            mutations.push(StoreMutation::Create(name.to_string()));
        }
    }

    for name in current_names {
        if !desired_names.contains(name.as_str()) && !ownership.is_externally_owned(name) {
            mutations.push(StoreMutation::Remove(name.clone()));
        }
    }

    mutations
}

/// Render a plan the way the CLI prints it
pub fn format_plan(mutations: &[StoreMutation]) -> String {
    if mutations.is_empty() {
        return "No library changes.".to_string();
    }

    mutations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
