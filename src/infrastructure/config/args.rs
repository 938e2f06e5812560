//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line overrides for the config file.
#[derive(Debug, Parser)]
#[command(
    name = "nodenote",
    version,
    about = "Create and open NodeNote graphs from the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the graph registry.
    #[arg(long, value_name = "PATH", env = "NODENOTE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Title of the directory picker dialog.
    #[arg(long, value_name = "TEXT")]
    pub picker_title: Option<String>,
}
