//! Spherical-world geometry types.
//!
//! Positions are spherical coordinates on the world globe: `theta` is the
//! polar angle, `phi` the azimuthal angle, both in radians.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub theta: f32,
    pub phi: f32,
}

impl Point {
    pub fn new(theta: f32, phi: f32) -> Self {
        Self { theta, phi }
    }
}

/// One terrain feature contributing to the elevation function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Terrain {
    /// Terrain kind name, e.g. "hills", "ranges", "continents".
    #[serde(rename = "type")]
    pub kind: String,
    pub origin: Point,
}

/// World elevation description: base radius plus an ordered list of terrain
/// features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    pub radius: f32,
    pub terrain: Vec<Terrain>,
}
