//! Meridian Client - the network-facing core of the game client.
//!
//! Turns the server's newline-delimited JSON stream into time-ordered state
//! mutations applied to the local world model, and carries player intents
//! back out. The crate is split hexagonally, following three layers:
//!
//! - [`ports`] - collaborator interfaces implemented by the rendering/GUI
//!   layer (scene, renderable world, GUI panels)
//! - [`application`] - the motive model and the per-frame scheduler
//!   ([`application::Thruster`])
//! - [`infrastructure`] - socket handling: LAN discovery, the connector,
//!   the receive loop and the outbound proxy
//!
//! The rendering engine itself, the on-screen controls and the application
//! shell live outside this crate and talk to it through the ports and the
//! [`infrastructure::Connector`] / [`infrastructure::Proxy`] pair.

pub mod application;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{Motive, MotiveContext, Thruster};
pub use config::ClientConfig;
pub use error::ConnectionError;
pub use infrastructure::{Connector, MessageSplitter, Proxy, Receiver, ServerDiscovery};
pub use ports::{GuiPort, ScenePort, WorldPort};
