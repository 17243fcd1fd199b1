//! Libraries derived from the build graph

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::artifact::{ArtifactLocation, ArtifactLocationDecoder};
use super::key::LibraryKey;
use super::table::RootKind;
use super::transaction::LibraryEdit;

/// Fills the roots of a library table entry.
///
/// The roots a library contributes depend on its kind, so each kind brings
/// its own implementation. The entry handed in has already been cleared.
pub trait LibraryContent: fmt::Debug + Send + Sync {
    fn populate(
        &self,
        decoder: &ArtifactLocationDecoder,
        library: &mut LibraryEdit<'_>,
    ) -> anyhow::Result<()>;
}

/// A library produced by the build, to be mirrored into the library table
#[derive(Debug, Clone)]
pub struct BlazeLibrary {
    pub key: LibraryKey,
    content: Arc<dyn LibraryContent>,
}

impl BlazeLibrary {
    pub fn new(key: LibraryKey, content: impl LibraryContent + 'static) -> Self {
        Self {
            key,
            content: Arc::new(content),
        }
    }

    /// A jar library keyed by its class jar
    pub fn jar(class_jar: ArtifactLocation, source_jars: Vec<ArtifactLocation>) -> Self {
        let key = LibraryKey::for_artifact(&class_jar.relative_path);
        Self::new(
            key,
            JarLibrary {
                class_jar,
                source_jars,
            },
        )
    }

    pub fn content(&self) -> &dyn LibraryContent {
        self.content.as_ref()
    }

    /// Read jar libraries from a JSON array of [`JarLibrarySpec`]
    pub fn load_jar_libraries(path: &Path) -> Result<Vec<BlazeLibrary>> {
        let contents = std::fs::read_to_string(path)?;
        let specs: Vec<JarLibrarySpec> = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse libraries {}: {e}", path.display()))
        })?;
        Ok(specs.into_iter().map(JarLibrarySpec::into_library).collect())
    }
}

/// A class jar with its optional source jars
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JarLibrary {
    pub class_jar: ArtifactLocation,
    #[serde(default)]
    pub source_jars: Vec<ArtifactLocation>,
}

impl LibraryContent for JarLibrary {
    fn populate(
        &self,
        decoder: &ArtifactLocationDecoder,
        library: &mut LibraryEdit<'_>,
    ) -> anyhow::Result<()> {
        library.add_root(&decoder.jar_url(&self.class_jar), RootKind::Classes)?;
        for source_jar in &self.source_jars {
            library.add_root(&decoder.jar_url(source_jar), RootKind::Sources)?;
        }
        Ok(())
    }
}

/// Serialized form of a jar library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JarLibrarySpec {
    /// Overrides the name derived from the class jar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub jar: JarLibrary,
}

impl JarLibrarySpec {
    pub fn into_library(self) -> BlazeLibrary {
        match self.name {
            Some(name) => BlazeLibrary::new(LibraryKey::from_store_name(name), self.jar),
            None => BlazeLibrary::jar(self.jar.class_jar, self.jar.source_jars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{InMemoryLibraryTable, LibraryTable, TableTransaction};

    #[test]
    fn test_jar_library_populates_roots() {
        let decoder = ArtifactLocationDecoder::new("/ws", "/exec");
        let library = BlazeLibrary::jar(
            ArtifactLocation::generated("bazel-out/bin", "java/libfoo.jar"),
            vec![ArtifactLocation::source("java/libfoo-src.jar")],
        );

        let mut table = InMemoryLibraryTable::new();
        {
            let mut txn = TableTransaction::begin(&mut table).unwrap();
            txn.create_library(library.key.store_name()).unwrap();
            let mut edit = txn.edit_library(library.key.store_name()).unwrap();
            library.content().populate(&decoder, &mut edit).unwrap();
        }

        let name = library.key.store_name();
        assert_eq!(
            table.root_urls(name, RootKind::Classes).unwrap(),
            vec!["jar:///exec/bazel-out/bin/java/libfoo.jar!/"]
        );
        assert_eq!(
            table.root_urls(name, RootKind::Sources).unwrap(),
            vec!["jar:///ws/java/libfoo-src.jar!/"]
        );
    }

    #[test]
    fn test_spec_name_override() {
        let spec: JarLibrarySpec = serde_json::from_str(
            r#"{ "name": "guava", "class_jar": { "relative_path": "third_party/guava.jar", "is_source": true } }"#,
        )
        .unwrap();
        let library = spec.into_library();
        assert_eq!(library.key.store_name(), "guava");
    }

    #[test]
    fn test_spec_without_name_derives_key() {
        let spec: JarLibrarySpec = serde_json::from_str(
            r#"{ "class_jar": { "relative_path": "third_party/guava.jar" }, "source_jars": [] }"#,
        )
        .unwrap();
        let library = spec.into_library();
        assert_eq!(library.key, LibraryKey::for_artifact("third_party/guava.jar"));
    }
}
