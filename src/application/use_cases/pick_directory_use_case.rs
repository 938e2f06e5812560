//! Directory picking use case.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::GraphError;
use crate::domain::ports::{HostBridgePort, PickDirectoryOptions};

/// Asks the host for a base directory for a new graph.
#[derive(Clone)]
pub struct PickDirectoryUseCase {
    bridge: Arc<dyn HostBridgePort>,
    options: PickDirectoryOptions,
}

impl PickDirectoryUseCase {
    /// Creates new use case with the picker dialog title.
    #[must_use]
    pub fn new(bridge: Arc<dyn HostBridgePort>, title: impl Into<String>) -> Self {
        Self {
            bridge,
            options: PickDirectoryOptions::new(title),
        }
    }

    /// Opens the picker. `Ok(None)` means the user cancelled.
    ///
    /// # Errors
    /// Returns error if the picker could not be shown.
    pub async fn execute(&self) -> Result<Option<PathBuf>, GraphError> {
        debug!(title = %self.options.title, "Opening directory picker");

        match self.bridge.pick_directory(&self.options).await {
            Ok(Some(path)) => {
                info!(path = %path.display(), "Directory selected");
                Ok(Some(path))
            }
            Ok(None) => {
                debug!("Directory picker cancelled");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Directory picker failed");
                Err(e)
            }
        }
    }
}
