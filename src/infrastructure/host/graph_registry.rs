//! JSON registry of known graphs.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info, warn};

use super::error::HostError;
use crate::domain::entities::GraphRecord;

const REGISTRY_DIR_NAME: &str = "NodeNote";
const REGISTRY_FILE_NAME: &str = "graph_registry.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    graphs: Vec<GraphRecord>,
}

/// Graph registry stored as `graph_registry.json`.
#[derive(Debug, Clone)]
pub struct GraphRegistry {
    path: PathBuf,
}

impl GraphRegistry {
    /// Opens the registry in `<data dir>/NodeNote`, or in `data_dir` when given.
    ///
    /// # Errors
    /// Returns [`HostError::DataDirNotFound`] when no override is given and
    /// the platform data directory is unknown.
    pub fn locate(data_dir: Option<&Path>) -> Result<Self, HostError> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => BaseDirs::new()
                .map(|dirs| dirs.data_dir().join(REGISTRY_DIR_NAME))
                .ok_or(HostError::DataDirNotFound)?,
        };

        Ok(Self::with_dir(&dir))
    }

    /// Creates a registry stored in `dir`.
    #[must_use]
    pub fn with_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(REGISTRY_FILE_NAME),
        }
    }

    /// Returns the registry file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every registered graph. A missing registry holds no graphs.
    ///
    /// Entries sharing a path are collapsed into the most recently opened
    /// one, so each path appears once.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid registry.
    pub async fn load(&self) -> Result<Vec<GraphRecord>, HostError> {
        if !fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "Graph registry not found");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        let registry: RegistryFile =
            serde_json::from_str(&content).map_err(|source| HostError::MalformedRegistry {
                path: self.path.clone(),
                source,
            })?;

        Ok(dedupe_by_path(registry.graphs))
    }

    /// Adds a graph, replacing any stale entry with the same path.
    ///
    /// # Errors
    /// Returns error if the registry cannot be read or written. A malformed
    /// registry is never overwritten.
    pub async fn register(&self, record: GraphRecord) -> Result<(), HostError> {
        let mut graphs = self.load().await?;

        if let Some(existing) = graphs.iter_mut().find(|g| g.path == record.path) {
            warn!(path = %record.path.display(), "Replacing stale registry entry");
            *existing = record;
        } else {
            graphs.push(record);
        }

        self.save(graphs).await
    }

    /// Updates the last-opened time of the graph at `path`.
    ///
    /// Returns whether the graph was registered.
    ///
    /// # Errors
    /// Returns error if the registry cannot be read or written.
    pub async fn mark_opened(&self, path: &Path, at: DateTime<Utc>) -> Result<bool, HostError> {
        let mut graphs = self.load().await?;

        let Some(graph) = graphs.iter_mut().find(|g| g.path == path) else {
            debug!(path = %path.display(), "Opened graph is not registered");
            return Ok(false);
        };
        graph.last_opened = at;

        self.save(graphs).await?;
        Ok(true)
    }

    async fn save(&self, graphs: Vec<GraphRecord>) -> Result<(), HostError> {
        let content = serde_json::to_string_pretty(&RegistryFile { graphs })
            .map_err(|e| HostError::RegistryWrite(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, content.as_bytes()))
            .await
            .map_err(|e| HostError::RegistryWrite(e.to_string()))??;

        info!(path = %self.path.display(), "Graph registry saved");
        Ok(())
    }
}

fn dedupe_by_path(graphs: Vec<GraphRecord>) -> Vec<GraphRecord> {
    let mut unique: Vec<GraphRecord> = Vec::with_capacity(graphs.len());

    for graph in graphs {
        let Some(existing) = unique.iter_mut().find(|g| g.path == graph.path) else {
            unique.push(graph);
            continue;
        };

        let (kept, dropped) = if graph.last_opened > existing.last_opened {
            (graph.name.clone(), std::mem::replace(existing, graph).name)
        } else {
            (existing.name.clone(), graph.name)
        };
        warn!(
            path = %existing.path.display(),
            kept = %kept,
            dropped = %dropped,
            "Duplicate graph path in registry"
        );
    }

    unique
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), HostError> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("Invalid path"))?;
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
