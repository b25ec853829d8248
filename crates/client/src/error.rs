//! Session-level error taxonomy.
//!
//! Decode problems are [`meridian_protocol::DecodeError`] and never escalate
//! past the receive loop. Everything here is a definite failure of the
//! current session surfaced to the caller; nothing aborts the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionError {
    /// A connection is already active; at most one session at a time.
    #[error("a connection is already active")]
    AlreadyConnected,

    /// Encoding an outbound move failed.
    #[error("failed to encode outbound move: {0}")]
    Encode(#[from] serde_json::Error),

    /// Socket-level failure (discovery, connect or mid-stream IO).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
