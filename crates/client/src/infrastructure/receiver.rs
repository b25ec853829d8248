//! The receive loop.
//!
//! Runs on its own task because socket reads block: pulls bytes off the
//! stream, splits them into frames, decodes each frame and submits the
//! resulting motive to the scheduler. A frame that fails to decode is
//! logged and skipped; end-of-stream or an IO failure ends the session.

use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::tcp::OwnedReadHalf;
use tokio::sync::oneshot;

use meridian_protocol::decode_action;

use crate::application::{Motive, Thruster};
use crate::infrastructure::framing::MessageSplitter;

const READ_BUFFER_SIZE: usize = 1024;

/// Reads frames from the server and feeds the scheduler.
pub struct Receiver {
    stream: OwnedReadHalf,
    thruster: Arc<Thruster>,
}

impl Receiver {
    pub fn new(stream: OwnedReadHalf, thruster: Arc<Thruster>) -> Self {
        Self { stream, thruster }
    }

    /// Runs until the stream ends, an IO error occurs, or `shutdown` fires.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) {
        tracing::debug!("receiver: start");

        let mut splitter = MessageSplitter::new();
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::debug!("receiver: shutdown requested");
                    break;
                }
                read = self.stream.read(&mut buffer) => match read {
                    Ok(0) => {
                        tracing::info!("server closed the connection");
                        break;
                    }
                    Ok(length) => {
                        for message in splitter.feed(&buffer[..length]) {
                            handle_message(&self.thruster, &message);
                        }
                    }
                    Err(e) => {
                        tracing::error!("receive loop failed: {}", e);
                        break;
                    }
                }
            }
        }

        tracing::debug!("receiver: stop");
    }
}

/// Decode one frame and submit its motive. Decode failures only skip the
/// frame: the server may speak a newer protocol than this client.
fn handle_message(thruster: &Thruster, message: &str) {
    match decode_action(message) {
        Ok(action) => thruster.submit(Motive::build(action)),
        Err(e) => tracing::warn!("skipping message: {}", e),
    }
}
