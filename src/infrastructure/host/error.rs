use std::path::PathBuf;

use thiserror::Error;

/// Failures of the in-process host commands.
#[derive(Debug, Error)]
pub enum HostError {
    /// No home or data directory could be resolved.
    #[error("data directory not found")]
    DataDirNotFound,

    #[error("a graph already exists at {}", .path.display())]
    /// The graph directory is already present.
    AlreadyExists {
        /// Existing graph directory.
        path: PathBuf,
    },

    /// Creating a graph directory failed.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Writing `config.edn` failed.
    #[error("failed to create config file {}: {source}", .path.display())]
    WriteConfig {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The registry file is not valid JSON.
    #[error("graph registry {} is malformed: {source}", .path.display())]
    MalformedRegistry {
        /// Registry file path.
        path: PathBuf,
        /// Parse error.
        source: serde_json::Error,
    },

    /// Persisting the registry failed.
    #[error("failed to update graph registry: {0}")]
    RegistryWrite(String),

    /// Other I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
