mod host_bridge_port;

pub use host_bridge_port::{HostBridgePort, PickDirectoryOptions};

#[cfg(test)]
pub mod mocks {
    pub use super::host_bridge_port::MockHostBridgePort;
}
