//! Core error types for the bridge
//!
//! Each crate keeps its own error enum and converts into [`BridgeError`] at
//! crate boundaries.

#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Mapping error: {0}")]
    Mapping(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
