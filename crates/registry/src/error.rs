//! Error types for the registry crate

use bridge_core::BridgeError;
use std::path::PathBuf;

/// Mapping-load error types
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// File I/O error
    #[error("Failed to read mapping file {path}: {source}")]
    FileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed mapping JSON
    #[error("Invalid {table} mappings: {source}")]
    InvalidFormat {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Table parsed but violates a table invariant
    #[error("Invalid {table} mappings: {message}")]
    InvalidEntry { table: &'static str, message: String },
}

impl From<RegistryError> for BridgeError {
    fn from(err: RegistryError) -> Self {
        BridgeError::Mapping(err.to_string())
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
