//! blaze-libsync - mirrors Bazel-derived libraries into an IDE project model
//!
//! This crate provides functionality to:
//! - Decode the build language schema (rules and their attributes)
//! - Reconcile a host-owned library table with the libraries the build produces
//! - Wire reconciled libraries and external modules into module dependency lists
pub mod bazel;
pub mod config;
pub mod error;
pub mod library;
pub mod ownership;
pub mod reconcile;
pub mod wire;

// Re-export commonly used types and traits
pub use error::{Error, Result};

pub use bazel::{AttributeDefinition, AttributeType, RuleDefinition, RuleSchema};
pub use config::{GlobalSettings, SyncConfig};
pub use library::{
    ArtifactLocation, ArtifactLocationDecoder, BlazeLibrary, InMemoryLibraryTable,
    JsonLibraryTable, LibraryKey, LibraryTable, RootKind,
};
pub use ownership::{ExternallyAddedLibraries, LibraryOwnership, SyncAugmenter};
pub use reconcile::{LibraryReconciler, ReconcileReport, StoreMutation};
pub use wire::{DependencyList, DependencyWirer, OrderEntry, WireOptions, WireReport};
