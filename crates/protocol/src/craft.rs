//! Crafting vocabulary used by the outbound `craft` move.

use serde::{Deserialize, Serialize};

use crate::actors::ActorId;

/// Material category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Essence {
    // Raw materials
    Rocks,
    Gold,
    Meat,
    #[serde(rename = "log")]
    Logs,
    Sticks,

    // Clothing
    Hat,
    Coat,
    Gloves,
    Shoes,
    Belt,
    BottomWear,
    UpperWear,
    Bag,

    // Other
    Plant,
    Hero,
    Tool,

    // Default category
    Void,
}

/// One source item consumed by a crafting assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub actor_id: ActorId,
    pub essence: Essence,
    pub quantity: i32,
}

/// A crafting request: the recipe to execute and the items feeding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    pub recipe_codename: String,
    pub sources: Vec<Item>,
}
