//! Wiring reconciled libraries into a module's dependency list

use serde::{Deserialize, Serialize};

use crate::library::{BlazeLibrary, LibraryKey, LibraryTable};

/// Modules with this name prefix hold externally sourced code
pub const EXTERNAL_MODULE_PREFIX: &str = "external-";

/// An ordered reference from a module to one of its dependencies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum OrderEntry {
    Module(String),
    Library(String),
}

/// A module's dependencies in resolution order.
///
/// Module entries always precede library entries so that source code in
/// modules wins over binaries in libraries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyList {
    entries: Vec<OrderEntry>,
}

impl DependencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a module entry ahead of every library entry.
    ///
    /// Returns `false` if the module is already listed.
    pub fn add_module_entry(&mut self, name: &str) -> bool {
        let entry = OrderEntry::Module(name.to_string());
        if self.entries.contains(&entry) {
            return false;
        }
        let position = self
            .entries
            .iter()
            .position(|e| matches!(e, OrderEntry::Library(_)))
            .unwrap_or(self.entries.len());
        self.entries.insert(position, entry);
        true
    }

    /// Append a library entry; returns `false` if it is already listed
    pub fn add_library_entry(&mut self, name: &str) -> bool {
        let entry = OrderEntry::Library(name.to_string());
        if self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lists the modules of the project
pub trait ModuleSource {
    fn module_names(&self) -> Vec<String>;
}

impl ModuleSource for Vec<String> {
    fn module_names(&self) -> Vec<String> {
        self.clone()
    }
}

/// How a dependency list is wired
#[derive(Clone, Copy)]
pub struct WireOptions<'a> {
    /// When set, external modules from this source are wired before libraries
    pub external_modules: Option<&'a dyn ModuleSource>,
    pub external_prefix: &'a str,
}

impl Default for WireOptions<'_> {
    fn default() -> Self {
        Self {
            external_modules: None,
            external_prefix: EXTERNAL_MODULE_PREFIX,
        }
    }
}

impl<'a> WireOptions<'a> {
    pub fn with_external_modules(modules: &'a dyn ModuleSource) -> Self {
        Self {
            external_modules: Some(modules),
            ..Default::default()
        }
    }

    pub fn external_prefix(mut self, prefix: &'a str) -> Self {
        self.external_prefix = prefix;
        self
    }
}

/// What a wiring pass added and which libraries it could not find
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WireReport {
    pub modules: Vec<String>,
    pub libraries: Vec<String>,
    /// Libraries missing from the table; the project needs a full resync
    pub missing: Vec<LibraryKey>,
}

impl WireReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Adds library (and external module) entries to module dependency lists
pub struct DependencyWirer<'a> {
    table: &'a dyn LibraryTable,
}

impl<'a> DependencyWirer<'a> {
    pub fn new(table: &'a dyn LibraryTable) -> Self {
        Self { table }
    }

    /// Wire `libraries` into `deps`, in input order.
    ///
    /// A library missing from the table is reported and skipped; the pass
    /// carries on with the remaining libraries.
    pub fn wire(
        &self,
        deps: &mut DependencyList,
        libraries: &[BlazeLibrary],
        options: &WireOptions<'_>,
    ) -> WireReport {
        let mut report = WireReport::default();

        if let Some(modules) = options.external_modules {
            for module in modules.module_names() {
                if module.starts_with(options.external_prefix) && deps.add_module_entry(&module) {
                    tracing::debug!("Added external module {}", module);
                    report.modules.push(module);
                }
            }
        }

        for library in libraries {
            let name = library.key.store_name();
            if !self.table.contains(name) {
                tracing::error!("Library missing: {}. Please resync project to resolve.", name);
                report.missing.push(library.key.clone());
                continue;
            }
            if deps.add_library_entry(name) {
                report.libraries.push(name.to_string());
            }
        }

        report
    }
}
