//! Session state persisted between runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Session state carried between launcher runs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Graph that was active when the launcher last closed.
    #[serde(default)]
    pub last_graph_path: Option<PathBuf>,

    /// Base directory picked most recently for a new graph.
    #[serde(default)]
    pub last_base_dir: Option<PathBuf>,
}
