//! Hero stat snapshot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hunger: f32,
    pub max_hunger: f32,
}
