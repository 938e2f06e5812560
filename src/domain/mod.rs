//! Domain layer with core entities and port definitions.

/// User-visible alerts.
pub mod alert;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use alert::{Alert, AlertLevel};
pub use entities::{GraphName, GraphRecord};
pub use errors::GraphError;
pub use ports::{HostBridgePort, PickDirectoryOptions};
