use std::path::PathBuf;

use prim_core::CallError;
use thiserror::Error;

pub type ConformResult<T> = Result<T, ConformError>;

#[derive(Debug, Error)]
pub enum ConformError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Call(#[from] CallError),

    #[error("Invalid case '{case}': {reason}")]
    InvalidCase { case: String, reason: String },

    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
