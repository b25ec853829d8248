//! World Port - the renderable projection of the scene.

use meridian_protocol::{Actor, ActorId, Attachment};

/// Port for the renderer: renderable proxies, animations and attachments.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait WorldPort: Send + Sync {
    /// Create renderable proxies for newly spawned actors.
    fn create_renderers(&self, actors: &[Actor]);

    /// Drop the renderable proxies of removed actors.
    fn delete_renderers(&self, actor_ids: &[ActorId]);

    /// Play a named animation on an actor.
    fn play_animation(&self, actor_id: ActorId, animation: &str);

    /// Attach `item_id`'s renderable to a hand-slot hook on `base_id`.
    fn attach_actor(&self, attachment: Attachment, base_id: ActorId, item_id: ActorId);

    /// Detach whatever is attached to a hand-slot hook on `base_id`.
    fn detach_actor(&self, attachment: Attachment, base_id: ActorId);

    /// Mark an actor as the current interaction candidate.
    fn set_highlighted_actor(&self, actor_id: ActorId);

    /// Clear the interaction highlight.
    fn remove_highlight(&self);
}
