//! In-process host bridge.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use super::graph_registry::GraphRegistry;
use super::graph_scaffold::GraphScaffold;
use super::native_picker::DirectoryDialog;
use crate::domain::entities::{GraphName, GraphRecord};
use crate::domain::errors::GraphError;
use crate::domain::ports::{HostBridgePort, PickDirectoryOptions};

/// Host bridge that performs the host commands in this process.
pub struct LocalHostBridge {
    registry: GraphRegistry,
    scaffold: GraphScaffold,
    dialog: Arc<dyn DirectoryDialog>,
}

impl LocalHostBridge {
    /// Creates a bridge with a custom directory dialog.
    #[must_use]
    pub fn with_dialog(registry: GraphRegistry, dialog: Arc<dyn DirectoryDialog>) -> Self {
        Self {
            registry,
            scaffold: GraphScaffold,
            dialog,
        }
    }

    /// Returns the registry backing graph listing.
    #[must_use]
    pub const fn registry(&self) -> &GraphRegistry {
        &self.registry
    }
}

#[async_trait]
impl HostBridgePort for LocalHostBridge {
    async fn pick_directory(
        &self,
        options: &PickDirectoryOptions,
    ) -> Result<Option<PathBuf>, GraphError> {
        Ok(self.dialog.pick_folder(options).await)
    }

    async fn create_graph(
        &self,
        base_path: &Path,
        name: &GraphName,
    ) -> Result<String, GraphError> {
        // An unreadable registry must fail before anything lands on disk.
        self.registry
            .load()
            .await
            .map_err(|e| GraphError::rejected(e.to_string()))?;

        let graph_dir = self
            .scaffold
            .create(base_path, name)
            .await
            .map_err(|e| GraphError::rejected(e.to_string()))?;

        let record = GraphRecord::new(name.as_str(), graph_dir.clone(), Utc::now());
        if let Err(e) = self.registry.register(record).await {
            error!(error = %e, path = %graph_dir.display(), "Graph not registered, removing it");
            if let Err(cleanup) = GraphScaffold::remove(&graph_dir).await {
                warn!(error = %cleanup, path = %graph_dir.display(), "Failed to remove unregistered graph");
            }
            return Err(GraphError::rejected(e.to_string()));
        }

        info!(name = %name, path = %graph_dir.display(), "Graph registered");
        Ok(format!("Graph created successfully at {}", graph_dir.display()))
    }

    async fn list_graphs(&self) -> Result<Vec<GraphRecord>, GraphError> {
        self.registry
            .load()
            .await
            .map_err(|e| GraphError::list_unavailable(e.to_string()))
    }

    async fn mark_opened(&self, path: &Path) -> Result<(), GraphError> {
        let found = self
            .registry
            .mark_opened(path, Utc::now())
            .await
            .map_err(|e| GraphError::rejected(e.to_string()))?;

        if !found {
            debug!(path = %path.display(), "Open event for unregistered graph ignored");
        }
        Ok(())
    }
}
