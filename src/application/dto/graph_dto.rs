//! Graph creation DTOs.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::GraphName;
use crate::domain::errors::GraphError;

/// Where the base directory of a new graph came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorySource {
    /// Picked before submission and cached in the form.
    Cached,
    /// Picked inline while submitting.
    Picked,
}

impl DirectorySource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Cached => "cached selection",
            Self::Picked => "picker at submit",
        }
    }
}

impl std::fmt::Display for DirectorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Graph creation request data, as entered in the form.
#[derive(Debug, Clone)]
pub struct CreateGraphRequest {
    /// Raw graph name input.
    pub graph_name: String,
    /// Base directory chosen earlier, if any.
    pub base_path: Option<PathBuf>,
}

impl CreateGraphRequest {
    /// Creates a request without a preselected directory.
    #[must_use]
    pub fn new(graph_name: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
            base_path: None,
        }
    }

    /// Sets the preselected base directory.
    #[must_use]
    pub fn with_base_path(mut self, base_path: Option<PathBuf>) -> Self {
        self.base_path = base_path;
        self
    }
}

/// Graph creation response data.
#[derive(Debug, Clone)]
pub struct CreateGraphResponse {
    /// Validated graph name.
    pub graph_name: GraphName,
    /// Base directory the graph was created under.
    pub base_path: PathBuf,
    /// Origin of the base directory.
    pub directory_source: DirectorySource,
    /// Host success message.
    pub message: String,
}

/// Failed graph creation.
///
/// Carries the directory picked during the attempt, so a retry does not
/// have to ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct CreateGraphFailure {
    /// Cause of the failure.
    pub error: GraphError,
    /// Directory picked while submitting, if the picker ran.
    pub picked_directory: Option<PathBuf>,
}

impl From<GraphError> for CreateGraphFailure {
    fn from(error: GraphError) -> Self {
        Self {
            error,
            picked_directory: None,
        }
    }
}
