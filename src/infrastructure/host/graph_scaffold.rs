//! On-disk layout of a new graph.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use super::error::HostError;
use crate::domain::entities::GraphName;

const NOTES_DIR: &str = "Notes";
const NODES_DIR: &str = "Nodes";
const CONFIG_FILE_NAME: &str = "config.edn";

const DEFAULT_CONFIG: &str = "{:meta/version 1\n ;; Currently, there are no config settings.\n ;; This will change at some point.\n }";

/// Creates the directory structure backing a graph.
///
/// ```text
/// <base>/<name>/
///   Notes/
///   Nodes/
///   config.edn
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphScaffold;

impl GraphScaffold {
    /// Returns the directory a graph named `name` would occupy under `base`.
    #[must_use]
    pub fn graph_dir(base: &Path, name: &GraphName) -> PathBuf {
        base.join(name)
    }

    /// Creates the graph layout and returns the graph directory.
    ///
    /// # Errors
    /// Returns [`HostError::AlreadyExists`] if the graph directory is already
    /// present, otherwise the failing filesystem step.
    pub async fn create(&self, base: &Path, name: &GraphName) -> Result<PathBuf, HostError> {
        let graph_dir = Self::graph_dir(base, name);

        if fs::try_exists(&graph_dir).await? {
            return Err(HostError::AlreadyExists { path: graph_dir });
        }

        for sub in [NOTES_DIR, NODES_DIR] {
            let path = graph_dir.join(sub);
            debug!(path = %path.display(), "Creating graph directory");
            fs::create_dir_all(&path)
                .await
                .map_err(|source| HostError::CreateDir {
                    path: path.clone(),
                    source,
                })?;
        }

        let config_path = graph_dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(|source| HostError::WriteConfig {
                path: config_path.clone(),
                source,
            })?;

        info!(path = %graph_dir.display(), "Graph layout created");
        Ok(graph_dir)
    }

    /// Deletes a graph directory created by [`Self::create`].
    ///
    /// # Errors
    /// Returns error if the directory cannot be removed.
    pub async fn remove(graph_dir: &Path) -> Result<(), HostError> {
        fs::remove_dir_all(graph_dir).await?;
        debug!(path = %graph_dir.display(), "Graph layout removed");
        Ok(())
    }
}
