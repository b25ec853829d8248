//! Application layer: the motive model and the per-frame scheduler.

pub mod motive;
pub mod thruster;

pub use motive::{Animation, Motive, MotiveContext, MAX_PICK_DISTANCE};
pub use thruster::Thruster;
