//! Graph creation use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{
    CreateGraphFailure, CreateGraphRequest, CreateGraphResponse, DirectorySource,
};
use crate::application::use_cases::PickDirectoryUseCase;
use crate::domain::entities::GraphName;
use crate::domain::errors::GraphError;
use crate::domain::ports::HostBridgePort;

/// Validates the creation form and asks the host to create the graph.
#[derive(Clone)]
pub struct CreateGraphUseCase {
    bridge: Arc<dyn HostBridgePort>,
    picker: PickDirectoryUseCase,
}

impl CreateGraphUseCase {
    /// Creates new graph creation use case.
    #[must_use]
    pub const fn new(bridge: Arc<dyn HostBridgePort>, picker: PickDirectoryUseCase) -> Self {
        Self { bridge, picker }
    }

    /// Executes graph creation.
    ///
    /// The name is validated before anything reaches the host. Without a
    /// preselected directory the picker is opened once.
    ///
    /// # Errors
    /// Returns a validation error for a blank or invalid name or a missing
    /// directory, otherwise the picker or host error. A directory picked
    /// before the host rejected the request is returned with the error.
    pub async fn execute(
        &self,
        request: CreateGraphRequest,
    ) -> Result<CreateGraphResponse, CreateGraphFailure> {
        let graph_name = GraphName::parse(&request.graph_name).map_err(|e| {
            warn!(error = %e, "Rejected graph name");
            e
        })?;

        let (base_path, directory_source) = match request.base_path {
            Some(path) => (path, DirectorySource::Cached),
            None => {
                debug!("No cached directory, opening picker");
                let path = self.picker.execute().await?.ok_or_else(|| {
                    warn!("No directory chosen for new graph");
                    GraphError::NoDirectorySelected
                })?;
                (path, DirectorySource::Picked)
            }
        };

        debug!(
            name = %graph_name,
            base_path = %base_path.display(),
            source = %directory_source,
            "Creating graph"
        );

        let message = match self.bridge.create_graph(&base_path, &graph_name).await {
            Ok(message) => message,
            Err(error) => {
                warn!(error = %error, name = %graph_name, "Graph creation rejected");
                let picked_directory =
                    (directory_source == DirectorySource::Picked).then_some(base_path);
                return Err(CreateGraphFailure {
                    error,
                    picked_directory,
                });
            }
        };

        info!(name = %graph_name, base_path = %base_path.display(), "Graph created");

        Ok(CreateGraphResponse {
            graph_name,
            base_path,
            directory_source,
            message,
        })
    }
}
