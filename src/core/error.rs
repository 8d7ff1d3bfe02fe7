//! Error types for refgraph

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using refgraph's Error
pub type Result<T> = std::result::Result<T, Error>;

/// refgraph error types
///
/// Only failures of the surrounding plumbing live here. Malformed tool
/// output, stale index lines and empty result sets degrade to partial
/// results and never surface as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to start {program}: {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {code:?}: {stderr}")]
    ToolFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Workspace not found: {path}")]
    NoWorkspace { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
