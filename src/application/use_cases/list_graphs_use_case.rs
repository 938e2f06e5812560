//! Graph listing use case.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::GraphRecord;
use crate::domain::errors::GraphError;
use crate::domain::ports::HostBridgePort;

/// Sorts graphs most recently opened first. Ties keep their input order.
pub fn sort_by_recency(graphs: &mut [GraphRecord]) {
    graphs.sort_by(|a, b| b.last_opened.cmp(&a.last_opened));
}

/// Keeps the first graph listed for each path.
fn retain_unique_paths(graphs: &mut Vec<GraphRecord>) {
    let mut seen = HashSet::new();
    graphs.retain(|graph| {
        let first = seen.insert(graph.path.clone());
        if !first {
            warn!(name = %graph.name, path = %graph.path.display(), "Hiding graph with duplicate path");
        }
        first
    });
}

/// Fetches the known graphs for display.
#[derive(Clone)]
pub struct ListGraphsUseCase {
    bridge: Arc<dyn HostBridgePort>,
}

impl ListGraphsUseCase {
    /// Creates new listing use case.
    #[must_use]
    pub const fn new(bridge: Arc<dyn HostBridgePort>) -> Self {
        Self { bridge }
    }

    /// Fetches all graphs sorted by last-opened time, newest first.
    ///
    /// Each path is listed once, by its most recently opened entry.
    ///
    /// # Errors
    /// Returns error if the host cannot list graphs.
    pub async fn execute(&self) -> Result<Vec<GraphRecord>, GraphError> {
        let mut graphs = self.bridge.list_graphs().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch graph list");
            e
        })?;

        sort_by_recency(&mut graphs);
        retain_unique_paths(&mut graphs);
        debug!(count = graphs.len(), "Graph list fetched");

        Ok(graphs)
    }

    /// Tells the host a graph was opened.
    ///
    /// # Errors
    /// Returns error if the host could not record the event.
    pub async fn mark_opened(&self, path: &Path) -> Result<(), GraphError> {
        debug!(path = %path.display(), "Recording graph open");
        self.bridge.mark_opened(path).await
    }
}
