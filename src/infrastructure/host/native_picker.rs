//! Native directory dialog.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::PickDirectoryOptions;

/// A dialog able to pick a directory.
#[async_trait]
pub trait DirectoryDialog: Send + Sync {
    /// Shows the dialog. `None` means cancelled.
    async fn pick_folder(&self, options: &PickDirectoryOptions) -> Option<PathBuf>;
}

/// OS directory picker through `rfd`.
#[derive(Debug, Clone, Default)]
pub struct NativeDirectoryPicker {
    start_dir: Option<PathBuf>,
}

impl NativeDirectoryPicker {
    /// Picker starting in the platform default directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog in `dir` instead of the platform default.
    #[must_use]
    pub fn with_start_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.start_dir = dir;
        self
    }
}

#[async_trait]
impl DirectoryDialog for NativeDirectoryPicker {
    async fn pick_folder(&self, options: &PickDirectoryOptions) -> Option<PathBuf> {
        let mut dialog = rfd::AsyncFileDialog::new().set_title(options.title.as_str());
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        if options.multiple {
            // Only one base directory is meaningful for a new graph.
            debug!("Multiple selection requested, keeping the first directory");
            return dialog
                .pick_folders()
                .await
                .and_then(|handles| handles.into_iter().next())
                .map(|handle| handle.path().to_path_buf());
        }

        dialog
            .pick_folder()
            .await
            .map(|handle| handle.path().to_path_buf())
    }
}
