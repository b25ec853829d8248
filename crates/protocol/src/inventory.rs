//! Inventory snapshot carried by `inventory_update` messages.

use serde::{Deserialize, Serialize};

use crate::actors::ActorId;
use crate::types::Hand;

/// Description of one carried entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInfo {
    pub id: ActorId,
    pub essence: String,
    pub current_quantity: i32,
    pub item_volume: i32,
    pub max_volume: i32,
    pub codename: String,
}

/// Full inventory snapshot: both hands plus the carried-entity slots.
/// `entities` slots may be empty (`null`), matching the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub left_hand: Option<EntityInfo>,
    #[serde(default)]
    pub right_hand: Option<EntityInfo>,
    #[serde(default)]
    pub entities: Option<Vec<Option<EntityInfo>>>,
}

impl Inventory {
    /// The item held in the given hand, if any.
    pub fn hand(&self, hand: Hand) -> Option<&EntityInfo> {
        match hand {
            Hand::Left => self.left_hand.as_ref(),
            Hand::Right => self.right_hand.as_ref(),
        }
    }

    /// Ids of every entity present in the inventory: both hands first, then
    /// the occupied carried slots.
    pub fn all_ids(&self) -> Vec<ActorId> {
        let mut result = Vec::new();

        if let Some(left) = &self.left_hand {
            result.push(left.id);
        }

        if let Some(right) = &self.right_hand {
            result.push(right.id);
        }

        if let Some(entities) = &self.entities {
            result.extend(entities.iter().flatten().map(|entity| entity.id));
        }

        result
    }
}
