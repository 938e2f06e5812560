//! Graph workflow error types.

use thiserror::Error;

/// Errors raised while creating or listing graphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum GraphError {
    #[error("please enter a graph name")]
    EmptyName,

    #[error("invalid graph name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("please select a directory for the new graph")]
    NoDirectorySelected,

    #[error("directory picker failed: {message}")]
    PickerFailed { message: String },

    #[error("{message}")]
    CommandRejected { message: String },

    #[error("{message}")]
    ListUnavailable { message: String },
}

impl GraphError {
    /// Creates invalid name error.
    #[must_use]
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates picker failure error.
    #[must_use]
    pub fn picker_failed(message: impl Into<String>) -> Self {
        Self::PickerFailed {
            message: message.into(),
        }
    }

    /// Creates command rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::CommandRejected {
            message: message.into(),
        }
    }

    /// Creates list unavailable error.
    #[must_use]
    pub fn list_unavailable(message: impl Into<String>) -> Self {
        Self::ListUnavailable {
            message: message.into(),
        }
    }

    /// Returns whether the error was raised locally, before any command ran.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::InvalidName { .. } | Self::NoDirectorySelected
        )
    }
}
