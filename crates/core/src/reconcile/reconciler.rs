//! Applies a reconciliation plan to a library table

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};
use crate::library::{ArtifactLocationDecoder, BlazeLibrary, LibraryTable, TableTransaction};
use crate::ownership::LibraryOwnership;

use super::plan::{StoreMutation, plan};
use super::report::ReconcileReport;

/// Converges a library table to the libraries produced by the build
#[derive(Debug, Clone)]
pub struct LibraryReconciler {
    decoder: ArtifactLocationDecoder,
}

impl LibraryReconciler {
    pub fn new(decoder: ArtifactLocationDecoder) -> Self {
        Self { decoder }
    }

    /// Run one reconciliation pass.
    ///
    /// Every desired library ends up in the table holding exactly the roots
    /// its content produces in this pass. Libraries the build no longer
    /// produces are removed unless `ownership` claims them. The table
    /// transaction is committed exactly once, on success and on failure; a
    /// failure is returned after that commit.
    pub fn reconcile(
        &self,
        table: &mut dyn LibraryTable,
        desired: &[BlazeLibrary],
        ownership: &dyn LibraryOwnership,
    ) -> Result<ReconcileReport> {
        let snapshot: BTreeSet<String> = table.library_names().into_iter().collect();
        tracing::info!("Workspace has {} libraries", desired.len());

        let mutations = plan(&snapshot, desired, ownership);
        let mut libraries: HashMap<&str, &BlazeLibrary> = HashMap::with_capacity(desired.len());
        for library in desired {
            libraries.entry(library.key.store_name()).or_insert(library);
        }

        let mut report = ReconcileReport::default();
        report.retained_external = snapshot
            .iter()
            .filter(|name| !libraries.contains_key(name.as_str()))
            .filter(|name| ownership.is_externally_owned(name))
            .cloned()
            .collect();

        let desired_library = |name: &str| {
            libraries
                .get(name)
                .copied()
                .ok_or_else(|| Error::LibraryNotFound(name.to_string()))
        };

        let mut txn = TableTransaction::begin(table)?;
        for mutation in &mutations {
            tracing::debug!("Applying {}", mutation);
            match mutation {
                StoreMutation::Create(name) => {
                    txn.create_library(name)?;
                    self.populate(&mut txn, desired_library(name)?, false)?;
                    report.created.push(name.clone());
                }
                StoreMutation::Update(name) => {
                    self.populate(&mut txn, desired_library(name)?, true)?;
                    report.updated.push(name.clone());
                }
                StoreMutation::Remove(name) => {
                    txn.remove_library(name)?;
                    report.removed.push(name.clone());
                }
            }
        }
        txn.commit()?;

        tracing::info!("{}", report);
        Ok(report)
    }

    /// Clear (when the library already existed) and repopulate one library.
    ///
    /// The library edit is committed before a population failure is returned.
    fn populate(
        &self,
        txn: &mut TableTransaction<'_>,
        library: &BlazeLibrary,
        existed: bool,
    ) -> Result<()> {
        let name = library.key.store_name();
        let mut edit = txn.edit_library(name)?;
        if existed {
            let cleared = edit.clear_roots()?;
            tracing::debug!("Cleared {} roots of {}", cleared, name);
        }

        let populated = library.content().populate(&self.decoder, &mut edit);
        let committed = edit.commit();

        populated.map_err(|source| Error::ContentPopulation {
            library: name.to_string(),
            source,
        })?;
        committed
    }
}
