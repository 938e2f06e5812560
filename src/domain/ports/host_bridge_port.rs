//! Host bridge port definition.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{GraphName, GraphRecord};
use crate::domain::errors::GraphError;

/// Request passed to the directory picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickDirectoryOptions {
    /// Pick directories rather than files.
    pub directory: bool,
    /// Allow more than one selection.
    pub multiple: bool,
    /// Dialog title.
    pub title: String,
}

impl PickDirectoryOptions {
    /// Creates a single-directory request with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            directory: true,
            multiple: false,
            title: title.into(),
        }
    }
}

/// Port for the host operations the launcher relies on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostBridgePort: Send + Sync {
    /// Opens a directory picker. `Ok(None)` means the user cancelled.
    async fn pick_directory(
        &self,
        options: &PickDirectoryOptions,
    ) -> Result<Option<PathBuf>, GraphError>;

    /// Creates the directory structure for a new graph under `base_path`.
    ///
    /// Returns the host's success message.
    async fn create_graph(&self, base_path: &Path, name: &GraphName)
    -> Result<String, GraphError>;

    /// Lists every graph known to the host, in host order.
    async fn list_graphs(&self) -> Result<Vec<GraphRecord>, GraphError>;

    /// Records that the graph at `path` was opened.
    async fn mark_opened(&self, path: &Path) -> Result<(), GraphError> {
        let _ = path;
        Ok(())
    }
}
