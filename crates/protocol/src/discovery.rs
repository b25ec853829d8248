//! LAN discovery handshake message.
//!
//! The client broadcasts this datagram on [`crate::constants::PORT_BROADCAST`];
//! any reply within the discovery window marks the sender as an available
//! server. Reply payloads are informational only and are not validated.

use serde::{Deserialize, Serialize};

use crate::constants::{api_version_string, PROTOCOL_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloMessage {
    pub name: String,
    pub version: String,
}

impl HelloMessage {
    /// Hello identifying this client and its protocol version.
    pub fn new() -> Self {
        Self {
            name: PROTOCOL_NAME.to_string(),
            version: api_version_string(),
        }
    }
}

impl Default for HelloMessage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_message_carries_name_and_version() {
        let json = serde_json::to_string(&HelloMessage::new()).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

        assert_eq!(value["name"], "meridian");
        assert_eq!(value["version"], "0.1.0");
    }
}
