//! Outbound move sender.
//!
//! Thin, clonable handle over the write half of the connection. Writes are
//! serialized through one async mutex so frames from concurrent callers
//! never interleave; failures surface to the caller directly, nothing is
//! buffered or retried.

use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::Mutex;

use meridian_protocol::{encode_move, ActorId, Assembly, Hand, Move, UpdateVariant};

use crate::error::ConnectionError;

/// Sends player intents (`moves`) to the server.
#[derive(Clone)]
pub struct Proxy {
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

impl Proxy {
    pub(crate) fn new(writer: OwnedWriteHalf) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    /// Encodes the move and writes it as one `\n`-terminated frame.
    pub async fn send_move(&self, game_move: &Move) -> Result<(), ConnectionError> {
        let mut frame = encode_move(game_move)?.into_bytes();
        frame.push(b'\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(&frame).await?;
        writer.flush().await?;
        Ok(())
    }

    pub async fn send_craft(&self, assembly: Assembly) -> Result<(), ConnectionError> {
        self.send_move(&Move::Craft { assembly }).await
    }

    pub async fn send_hand_activation(
        &self,
        hand: Hand,
        object_id: Option<ActorId>,
    ) -> Result<(), ConnectionError> {
        self.send_move(&Move::HandActivation { hand, object_id }).await
    }

    pub async fn send_inventory_update(
        &self,
        hand: Hand,
        inventory_index: i32,
        update_variant: UpdateVariant,
    ) -> Result<(), ConnectionError> {
        self.send_move(&Move::InventoryUpdate {
            hand,
            inventory_index,
            update_variant,
        })
        .await
    }

    pub async fn send_motion_start(&self, bearing: f32) -> Result<(), ConnectionError> {
        self.send_move(&Move::MotionStart { bearing }).await
    }

    pub async fn send_motion_stop(&self) -> Result<(), ConnectionError> {
        self.send_move(&Move::MotionStop).await
    }
}
