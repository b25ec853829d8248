//! Scene Port - the logical world model.

use meridian_protocol::{Actor, ActorId, Elevation, Point};

/// Port for the logical scene: actor existence and placement on the globe.
///
/// Positions are spherical coordinates; `move_actor_by` displaces an actor
/// along a surface bearing by a distance expressed in world units.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ScenePort: Send + Sync {
    /// Set up the world: hero identity and elevation function.
    fn configure(&self, hero_actor_id: ActorId, elevation: &Elevation);

    /// Add actors to the scene.
    fn create_actors(&self, actors: &[Actor]);

    /// Remove actors from the scene.
    fn delete_actors(&self, actor_ids: &[ActorId]);

    /// Keep actors in the scene but exclude them from rendering and
    /// proximity queries (used for carried inventory items).
    fn hide_actors(&self, actor_ids: &[ActorId]);

    /// Place an actor at an absolute position.
    fn set_actor_position(&self, actor_id: ActorId, theta: f32, phi: f32);

    /// Displace an actor by `distance` along `bearing`.
    fn move_actor_by(&self, actor_id: ActorId, distance: f32, bearing: f32);

    /// The hero's actor id, as set by `configure`.
    fn hero_id(&self) -> ActorId;

    /// Current position of an actor, if it exists and is placed.
    fn actor_position(&self, actor_id: ActorId) -> Option<Point>;

    /// Ids of actors within `max_distance` of `position`, nearest first.
    /// An actor standing exactly at `position` is included.
    fn find_closest_actors(&self, position: &Point, max_distance: f32) -> Vec<ActorId>;
}
