//! In-process implementation of the host bridge.

mod error;
mod graph_registry;
mod graph_scaffold;
mod local_bridge;
mod native_picker;

pub use error::HostError;
pub use graph_registry::GraphRegistry;
pub use graph_scaffold::GraphScaffold;
pub use local_bridge::LocalHostBridge;
pub use native_picker::{DirectoryDialog, NativeDirectoryPicker};
