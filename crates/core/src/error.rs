use std::io;

/// Errors that can occur while syncing a Bazel project model
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Schema error: {0}")]
    SchemaError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Library not found: {0}")]
    LibraryNotFound(String),

    #[error("Library already exists: {0}")]
    LibraryExists(String),

    #[error("A modifiable transaction is already open on the library table")]
    TransactionAlreadyOpen,

    #[error("No modifiable transaction is open on the library table")]
    NoTransaction,

    #[error("Library {0} is not open for editing")]
    LibraryNotEditable(String),

    #[error("Failed to populate roots of library {library}: {source}")]
    ContentPopulation {
        library: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for blaze-libsync operations
pub type Result<T> = std::result::Result<T, Error>;
