//! Library identity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Identifies a library by the name it carries in the library table.
///
/// Two keys are equal iff their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryKey {
    name: String,
}

impl LibraryKey {
    /// Wrap a name read back from the library table
    pub fn from_store_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Derive the key of a jar artifact from its workspace-relative path.
    ///
    /// The name is `<file stem>_<hash>`, where the hash is taken over the parent
    /// directory so that equally named jars in different packages stay distinct.
    pub fn for_artifact(relative_path: &str) -> Self {
        let path = Path::new(relative_path);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| relative_path.to_string());
        let hashed = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
            _ => relative_path.to_string(),
        };
        let digest = format!("{:x}", md5::compute(hashed.as_bytes()));

        Self {
            name: format!("{}_{}", stem, &digest[..8]),
        }
    }

    /// The name under which the library is stored
    pub fn store_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for LibraryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_store_name_round_trip() {
        let key = LibraryKey::from_store_name("guava_1a2b3c4d");
        assert_eq!(key.store_name(), "guava_1a2b3c4d");
        assert_eq!(key.to_string(), "guava_1a2b3c4d");
    }

    #[test]
    fn test_artifact_keys_are_stable() {
        let first = LibraryKey::for_artifact("third_party/guava/guava-31.jar");
        let second = LibraryKey::for_artifact("third_party/guava/guava-31.jar");
        assert_eq!(first, second);
        assert!(first.store_name().starts_with("guava-31_"));
        assert_eq!(first.store_name().len(), "guava-31_".len() + 8);
    }

    #[test]
    fn test_same_jar_name_in_different_packages() {
        let a = LibraryKey::for_artifact("java/com/a/libcore.jar");
        let b = LibraryKey::for_artifact("java/com/b/libcore.jar");
        assert_ne!(a, b);
    }

    #[test]
    fn test_artifact_without_parent() {
        let key = LibraryKey::for_artifact("top.jar");
        assert!(key.store_name().starts_with("top_"));
    }

    #[test]
    fn test_equality_is_by_name() {
        let keys: HashSet<LibraryKey> = [
            LibraryKey::from_store_name("a"),
            LibraryKey::from_store_name("a"),
            LibraryKey::from_store_name("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(keys.len(), 2);
    }
}
