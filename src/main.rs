use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use nodenote::infrastructure::{
    AppConfig, CliArgs, GraphRegistry, LocalHostBridge, NativeDirectoryPicker, StorageManager,
};
use nodenote::presentation::App;
use nodenote::presentation::ui::LauncherController;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;

    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = nodenote::VERSION, "Starting NodeNote launcher");

    let state = storage.load_state()?;
    let registry = GraphRegistry::locate(config.data_dir.as_deref())?;
    info!(path = %registry.path().display(), "Using graph registry");

    let picker = NativeDirectoryPicker::new().with_start_dir(state.last_base_dir.clone());
    let bridge = Arc::new(LocalHostBridge::with_dialog(registry, Arc::new(picker)));

    let launcher = LauncherController::new(bridge, config.picker.title.clone()).with_state(state);

    Ok(App::new(launcher, storage, config.ui))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
