//! Wire message types for the game connection.
//!
//! Every message on the stream is one JSON object per line with a mandatory
//! string field `"type"` selecting the concrete variant. Inbound messages
//! (server to client) decode to [`Action`]; outbound messages (client to
//! server) encode from [`Move`].
//!
//! ## Versioning Policy
//!
//! - Unknown sibling keys are ignored (forward compatible)
//! - An unknown `"type"` value is a [`DecodeError::UnknownTag`], never a
//!   crash; callers are expected to skip the message and keep the stream
//!   alive
//! - Tag matching is exact and case-sensitive

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::actors::{Actor, ActorId};
use crate::craft::Assembly;
use crate::geometry::{Elevation, Point};
use crate::inventory::Inventory;
use crate::stats::Stats;
use crate::types::{DamageVariant, Hand, UpdateVariant};

// =============================================================================
// Inbound Messages (Server → Client)
// =============================================================================

/// A server-authoritative event received over the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Initial world setup: who the hero is and how the globe is shaped.
    Configuration {
        hero_actor_id: ActorId,
        elevation: Elevation,
    },
    /// New actors entered the world.
    ActorCreation { actors: Vec<Actor> },
    /// Actors left the world.
    ActorDeletion { actor_ids: Vec<ActorId> },
    /// An actor started moving at `speed` along `bearing` for `duration`
    /// seconds.
    Motion {
        actor_id: ActorId,
        speed: f32,
        bearing: f32,
        duration: f32,
    },
    /// Authoritative absolute position for an actor.
    Localization { actor_id: ActorId, position: Point },
    /// Hero stat snapshot.
    StatUpdate { actor_id: ActorId, stats: Stats },
    /// An actor started picking an item up.
    PickBegin { who: ActorId, what: ActorId },
    /// An actor finished picking an item up.
    PickEnd { who: ActorId },
    /// Full inventory snapshot for an actor.
    InventoryUpdate {
        owner_id: ActorId,
        inventory: Inventory,
    },
    /// One actor dealt damage to another.
    Damage {
        dealer_id: ActorId,
        receiver_id: ActorId,
        variant: DamageVariant,
        hand: Hand,
    },
    /// An actor started crafting.
    CraftBegin { crafter_id: ActorId },
    /// An actor finished crafting.
    CraftEnd { crafter_id: ActorId },
    /// An actor returned to its idle state.
    Idle { actor_id: ActorId },
}

/// Wire tags of every known [`Action`] variant. Kept in lockstep with the
/// serde attributes above; decode rejects anything outside this table.
const ACTION_TAGS: &[&str] = &[
    "configuration",
    "actor_creation",
    "actor_deletion",
    "motion",
    "localization",
    "stat_update",
    "pick_begin",
    "pick_end",
    "inventory_update",
    "damage",
    "craft_begin",
    "craft_end",
    "idle",
];

impl Action {
    /// The wire discriminator of this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Action::Configuration { .. } => "configuration",
            Action::ActorCreation { .. } => "actor_creation",
            Action::ActorDeletion { .. } => "actor_deletion",
            Action::Motion { .. } => "motion",
            Action::Localization { .. } => "localization",
            Action::StatUpdate { .. } => "stat_update",
            Action::PickBegin { .. } => "pick_begin",
            Action::PickEnd { .. } => "pick_end",
            Action::InventoryUpdate { .. } => "inventory_update",
            Action::Damage { .. } => "damage",
            Action::CraftBegin { .. } => "craft_begin",
            Action::CraftEnd { .. } => "craft_end",
            Action::Idle { .. } => "idle",
        }
    }
}

// =============================================================================
// Outbound Messages (Client → Server)
// =============================================================================

/// A player-intent message sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Move {
    /// Execute a crafting recipe.
    Craft { assembly: Assembly },
    /// Use the item held in `hand`, optionally on a target object.
    HandActivation {
        hand: Hand,
        object_id: Option<ActorId>,
    },
    /// Move an item between a hand and an inventory slot.
    InventoryUpdate {
        hand: Hand,
        inventory_index: i32,
        update_variant: UpdateVariant,
    },
    /// Start walking along `bearing`.
    MotionStart { bearing: f32 },
    /// Stop walking.
    MotionStop,
}

impl Move {
    /// The wire discriminator of this variant.
    pub fn tag(&self) -> &'static str {
        match self {
            Move::Craft { .. } => "craft",
            Move::HandActivation { .. } => "hand_activation",
            Move::InventoryUpdate { .. } => "inventory_update",
            Move::MotionStart { .. } => "motion_start",
            Move::MotionStop => "motion_stop",
        }
    }
}

// =============================================================================
// Codec
// =============================================================================

/// Why a received message could not be decoded.
///
/// None of these are fatal to the session: the receive loop logs the error
/// and moves on to the next frame.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON, or a known variant is missing required
    /// fields.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The message has no string `"type"` field.
    #[error("message has no \"type\" field")]
    MissingTag,

    /// The `"type"` value matches no known action. Expected when talking to
    /// a newer server; the message is skipped.
    #[error("unknown message type: {0:?}")]
    UnknownTag(String),
}

/// Decodes one message line into an [`Action`].
pub fn decode_action(text: &str) -> Result<Action, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingTag)?;

    if !ACTION_TAGS.contains(&tag) {
        return Err(DecodeError::UnknownTag(tag.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

/// Encodes a [`Move`] as one message line (without the trailing newline).
pub fn encode_move(game_move: &Move) -> Result<String, serde_json::Error> {
    serde_json::to_string(game_move)
}
