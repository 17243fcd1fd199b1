//! Which libraries in the table belong to someone else.
//!
//! Ownership is decided by name alone: a library another subsystem created is
//! recognized because that subsystem reports its name. All checks go through
//! [`LibraryOwnership`] so a provenance-based policy can replace the name set
//! without touching the reconciler.

use std::collections::BTreeSet;

/// Decides whether a library is managed outside of the build sync
pub trait LibraryOwnership {
    fn is_externally_owned(&self, name: &str) -> bool;
}

/// A subsystem that adds its own libraries to the table during sync
pub trait SyncAugmenter {
    /// Names of the libraries this augmenter maintains
    fn externally_added_libraries(&self) -> Vec<String>;
}

/// Names reported by augmenters, fixed for the duration of one sync cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternallyAddedLibraries {
    names: BTreeSet<String>,
}

impl ExternallyAddedLibraries {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Union of the names reported by every active augmenter
    pub fn collect(augmenters: &[&dyn SyncAugmenter]) -> Self {
        let names: BTreeSet<String> = augmenters
            .iter()
            .flat_map(|augmenter| augmenter.externally_added_libraries())
            .collect();
        tracing::debug!("{} externally added libraries", names.len());
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl LibraryOwnership for ExternallyAddedLibraries {
    fn is_externally_owned(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl SyncAugmenter for Vec<String> {
    fn externally_added_libraries(&self) -> Vec<String> {
        self.clone()
    }
}
