//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;

pub(crate) const APP_QUALIFIER: &str = "org";
pub(crate) const APP_ORGANIZATION: &str = "nodenote";
pub(crate) const APP_NAME: &str = "nodenote";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and CLI overrides.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory holding the graph registry. Defaults to the platform data
    /// directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Directory picker configuration.
    #[serde(default)]
    pub picker: PickerConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Directory picker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Picker dialog title.
    #[serde(default = "default_picker_title")]
    pub title: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            title: default_picker_title(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Timestamp format string (chrono format) for last-opened times.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Show the last-opened time next to each graph.
    #[serde(default = "default_true")]
    pub show_last_opened: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            show_last_opened: true,
        }
    }
}

fn default_picker_title() -> String {
    "Select a directory for the new graph".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(data_dir) = args.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(title) = args.picker_title {
            self.picker.title = title;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("nodenote.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            data_dir: None,
            picker: PickerConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
