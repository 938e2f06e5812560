//! Infrastructure layer with adapters for config files and the host.

/// Application configuration.
pub mod config;
/// Host bridge adapter.
pub mod host;

pub use config::{AppConfig, CliArgs, LogLevel, StateConfig, StorageManager};
pub use host::{GraphRegistry, LocalHostBridge, NativeDirectoryPicker};
