//! Meridian Protocol - Shared types for server and client communication
//!
//! This crate contains all types exchanged over the game connection:
//! - Wire-format message types (inbound `Action`, outbound `Move`)
//! - Value objects referenced by messages (actors, geometry, inventory, stats)
//! - The LAN discovery handshake message
//! - Well-known ports and protocol version constants
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and thiserror
//! 2. **No game logic** - Pure data types and serialization
//! 3. **Forward compatible** - Unknown sibling keys in a message are ignored;
//!    an unknown message tag is a [`DecodeError`], never a panic

pub mod actors;
pub mod constants;
pub mod craft;
pub mod discovery;
pub mod geometry;
pub mod inventory;
pub mod messages;
pub mod stats;
pub mod types;

pub use actors::{Actor, ActorId};
pub use constants::{API_VERSION, PORT_BROADCAST, PORT_DATA, PROTOCOL_NAME};
pub use craft::{Assembly, Essence, Item};
pub use discovery::HelloMessage;
pub use geometry::{Elevation, Point, Terrain};
pub use inventory::{EntityInfo, Inventory};
pub use messages::{decode_action, encode_move, Action, DecodeError, Move};
pub use stats::Stats;
pub use types::{Attachment, DamageVariant, Hand, UpdateVariant};
