//! UI screens.

mod alert_popup;
mod app;
mod create_graph_modal;
mod launcher;

pub use alert_popup::AlertPopup;
pub use app::App;
pub use create_graph_modal::{CreateGraphModal, CreateGraphModalAction, DirectoryStatus};
pub use launcher::{LauncherCommand, LauncherController};
