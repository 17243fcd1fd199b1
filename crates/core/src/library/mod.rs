//! Libraries and the library table they are reconciled into

pub mod artifact;
pub mod blaze_library;
pub mod json_table;
pub mod key;
pub mod memory;
pub mod table;
pub mod transaction;

pub use artifact::{ArtifactLocation, ArtifactLocationDecoder};
pub use blaze_library::{BlazeLibrary, JarLibrary, JarLibrarySpec, LibraryContent};
pub use json_table::JsonLibraryTable;
pub use key::LibraryKey;
pub use memory::{InMemoryLibraryTable, LibraryEntry};
pub use table::{LibraryTable, RootKind};
pub use transaction::{LibraryEdit, TableTransaction};
