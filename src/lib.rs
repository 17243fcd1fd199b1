//! Shared fixtures for the workspace integration tests

use blaze_libsync_core::library::JarLibrary;
use blaze_libsync_core::{ArtifactLocation, ArtifactLocationDecoder, BlazeLibrary, LibraryKey};

pub const WORKSPACE_ROOT: &str = "/ws";
pub const EXECUTION_ROOT: &str = "/exec";

pub fn decoder() -> ArtifactLocationDecoder {
    ArtifactLocationDecoder::new(WORKSPACE_ROOT, EXECUTION_ROOT)
}

/// A jar library stored under `name`, with a class jar and one source jar
pub fn jar_library(name: &str) -> BlazeLibrary {
    BlazeLibrary::new(
        LibraryKey::from_store_name(name),
        JarLibrary {
            class_jar: ArtifactLocation::generated("bazel-out/bin", format!("{name}.jar")),
            source_jars: vec![ArtifactLocation::source(format!("{name}-src.jar"))],
        },
    )
}

pub fn class_url(name: &str) -> String {
    format!("jar://{EXECUTION_ROOT}/bazel-out/bin/{name}.jar!/")
}

pub fn source_url(name: &str) -> String {
    format!("jar://{WORKSPACE_ROOT}/{name}-src.jar!/")
}
