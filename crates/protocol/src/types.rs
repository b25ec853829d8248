//! Small enums shared by messages on both directions of the wire.

use serde::{Deserialize, Serialize};

/// Which hand an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Hand {
    Left,
    Right,
}

/// Kind of damage dealt by an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageVariant {
    Hit,
    Chop,
    Smash,
    Attack,
}

/// How an inventory slot interacts with the held item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UpdateVariant {
    Swap,
    Merge,
}

/// Hand-slot hooks a renderable item can be attached to. Not serialized;
/// the names match the skeleton hook names used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attachment {
    LeftItem,
    RightItem,
}

impl Attachment {
    pub fn hook_name(self) -> &'static str {
        match self {
            Attachment::LeftItem => "left_item",
            Attachment::RightItem => "right_item",
        }
    }
}
