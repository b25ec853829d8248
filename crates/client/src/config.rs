//! Client network configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use meridian_protocol::{PORT_BROADCAST, PORT_DATA};

/// Ports and timeouts for the network session. [`Default`] matches the
/// protocol's well-known values; tests override the ports with ephemeral
/// ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// TCP port carrying the message stream.
    pub data_port: u16,
    /// UDP port discovery broadcasts are sent to.
    pub broadcast_port: u16,
    /// How long to collect discovery replies, in milliseconds.
    pub discovery_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_port: PORT_DATA,
            broadcast_port: PORT_BROADCAST,
            discovery_timeout_ms: 1000,
        }
    }
}

impl ClientConfig {
    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_millis(self.discovery_timeout_ms)
    }
}
