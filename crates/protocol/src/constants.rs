//! Well-known ports and protocol identification.

/// Client identifier sent in the discovery handshake.
pub const PROTOCOL_NAME: &str = "meridian";

/// Protocol version as `[major, minor, patch]`.
pub const API_VERSION: [u16; 3] = [0, 1, 0];

/// UDP port servers listen on for discovery broadcasts.
pub const PORT_BROADCAST: u16 = 5980;

/// TCP port carrying the newline-delimited message stream.
pub const PORT_DATA: u16 = 5981;

/// Formats [`API_VERSION`] as `major.minor.patch`.
pub fn api_version_string() -> String {
    format!(
        "{}.{}.{}",
        API_VERSION[0], API_VERSION[1], API_VERSION[2]
    )
}
