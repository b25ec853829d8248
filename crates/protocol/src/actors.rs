//! Actor identity and spawn data.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Server-assigned identifier of an actor. 64-bit on the wire.
pub type ActorId = i64;

/// Spawn description for one actor, as carried by `actor_creation` messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub entity_name: String,
    /// Absent for actors that are not placed in the scene (e.g. carried items).
    #[serde(default)]
    pub position: Option<Point>,
}
