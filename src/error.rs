//! Error kinds shared by the store, the remote client and the pipelines.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = SyncError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum SyncError {
    /// Invalid or incomplete configuration. Always fatal.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is valid JSON but not an object of string values.
    #[error("{} must contain a flat object of strings: {reason}", path.display())]
    NotFlatObject { path: PathBuf, reason: String },

    #[error("Duplicate key '{key}' in {} (already defined by an earlier source file)", path.display())]
    DuplicateKey { key: String, path: PathBuf },

    #[error("Remote request failed with status {status}: {body}")]
    RemoteRequest { status: u16, body: String },

    #[error("Key '{key}' exists in '{language}' but not in the reference language")]
    MissingReferenceKey { key: String, language: String },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to serialize JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SyncError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
