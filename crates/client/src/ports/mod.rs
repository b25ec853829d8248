//! Collaborator interfaces consumed by motive effects.
//!
//! These ports define the contract the rendering/GUI layer must implement,
//! allowing the motive model to mutate the world without depending on a
//! concrete engine. Motive effects are invoked on the render thread and must
//! stay non-blocking: implementations must not perform I/O and must not call
//! back into the scheduler.

pub mod gui;
pub mod scene;
pub mod world;

pub use gui::GuiPort;
pub use scene::ScenePort;
pub use world::WorldPort;

#[cfg(any(test, feature = "testing"))]
pub use gui::MockGuiPort;
#[cfg(any(test, feature = "testing"))]
pub use scene::MockScenePort;
#[cfg(any(test, feature = "testing"))]
pub use world::MockWorldPort;
