//! Graph entities.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::GraphError;

/// A graph known to the host, as listed by the graph registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Display name.
    pub name: String,
    /// Directory backing the graph. Unique within a listing.
    pub path: PathBuf,
    /// Creation time, absent for entries written by older hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last time the graph was opened.
    pub last_opened: DateTime<Utc>,
}

impl GraphRecord {
    /// Creates a record that was just created and opened.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, now: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            created_at: Some(now),
            last_opened: now,
        }
    }

    /// Returns the graph directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Validated graph name, safe to use as a single directory component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphName(String);

impl GraphName {
    /// Parses user input into a graph name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyName`] for blank input and
    /// [`GraphError::InvalidName`] when the name would not be a plain
    /// directory name.
    pub fn parse(input: &str) -> Result<Self, GraphError> {
        let name = input.trim();

        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if name.contains(['/', '\\']) {
            return Err(GraphError::invalid_name(
                name,
                "name must not contain path separators",
            ));
        }
        if name == "." || name == ".." {
            return Err(GraphError::invalid_name(name, "name is reserved"));
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for GraphName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}
