//! Motives: deferred instructions built from decoded actions.
//!
//! A motive is the unit of work the scheduler hands to the render thread:
//! one decoded [`Action`] plus the bookkeeping needed to run its effect over
//! one or more frames and decide when it is done. Most motives fire once and
//! expire; `motion` keeps displacing its actor until the announced duration
//! has elapsed.

use std::sync::Arc;
use std::time::{Duration, Instant};

use meridian_protocol::{Action, ActorId, Attachment, Hand};

use crate::ports::{GuiPort, ScenePort, WorldPort};

/// Interaction highlight radius around the hero, in world units.
pub const MAX_PICK_DISTANCE: f32 = 1.0;

/// Animations the motive effects trigger on renderables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Idle,
    Walk,
    Pick,
    Damaged,
    SwingLeft,
    SwingRight,
}

impl Animation {
    pub fn name(self) -> &'static str {
        match self {
            Animation::Idle => "idle",
            Animation::Walk => "walk",
            Animation::Pick => "pick",
            Animation::Damaged => "damaged",
            Animation::SwingLeft => "swing_left",
            Animation::SwingRight => "swing_right",
        }
    }
}

/// The collaborators a motive mutates when ticked.
#[derive(Clone)]
pub struct MotiveContext {
    pub scene: Arc<dyn ScenePort>,
    pub world: Arc<dyn WorldPort>,
    pub gui: Arc<dyn GuiPort>,
}

impl MotiveContext {
    pub fn new(
        scene: Arc<dyn ScenePort>,
        world: Arc<dyn WorldPort>,
        gui: Arc<dyn GuiPort>,
    ) -> Self {
        Self { scene, world, gui }
    }
}

/// One deferred instruction derived from a single [`Action`].
#[derive(Debug)]
pub struct Motive {
    action: Action,
    created_at: Instant,
    expired: bool,
    tick_count: u32,
}

impl Motive {
    /// Builds the motive for a decoded action. Total: every action variant
    /// has exactly one motive behavior.
    pub fn build(action: Action) -> Self {
        Self {
            action,
            created_at: Instant::now(),
            expired: false,
            tick_count: 0,
        }
    }

    /// The actor this motive is keyed on, if any. A newer motive for the
    /// same actor unconditionally replaces an older one in the scheduler.
    pub fn actor_id(&self) -> Option<ActorId> {
        match &self.action {
            Action::Motion { actor_id, .. } | Action::Localization { actor_id, .. } => {
                Some(*actor_id)
            }
            _ => None,
        }
    }

    /// Whether the motive is done and must be purged before the next tick.
    pub fn is_expired(&self) -> bool {
        match &self.action {
            // Expires on wall-clock time relative to creation, not on ticks.
            Action::Motion { duration, .. } => {
                self.created_at.elapsed().as_secs_f32() > *duration
            }
            _ => self.expired,
        }
    }

    /// Runs the effect for one frame. `elapsed` is the wall-clock time since
    /// the previous scheduler tick.
    pub fn tick(&mut self, elapsed: Duration, context: &MotiveContext) {
        let first_tick = self.tick_count == 0;

        match &self.action {
            Action::Configuration {
                hero_actor_id,
                elevation,
            } => {
                context.scene.configure(*hero_actor_id, elevation);
            }
            Action::ActorCreation { actors } => {
                context.scene.create_actors(actors);
                context.world.create_renderers(actors);
                refresh_highlight(context);
            }
            Action::ActorDeletion { actor_ids } => {
                context.scene.delete_actors(actor_ids);
                context.world.delete_renderers(actor_ids);
                refresh_highlight(context);
            }
            Action::Motion {
                actor_id,
                speed,
                bearing,
                ..
            } => {
                let distance = speed * elapsed.as_secs_f32();
                context.scene.move_actor_by(*actor_id, distance, *bearing);
                if first_tick {
                    context
                        .world
                        .play_animation(*actor_id, Animation::Walk.name());
                }
                refresh_highlight(context);
            }
            Action::Localization { actor_id, position } => {
                context
                    .scene
                    .set_actor_position(*actor_id, position.theta, position.phi);
                context
                    .world
                    .play_animation(*actor_id, Animation::Idle.name());
                refresh_highlight(context);
            }
            Action::StatUpdate { stats, .. } => {
                context.gui.set_stats(stats);
            }
            Action::InventoryUpdate {
                owner_id,
                inventory,
            } => {
                context.gui.set_inventory(inventory);
                context.scene.hide_actors(&inventory.all_ids());

                for (hand, attachment) in [
                    (Hand::Left, Attachment::LeftItem),
                    (Hand::Right, Attachment::RightItem),
                ] {
                    match inventory.hand(hand) {
                        Some(item) => context.world.attach_actor(attachment, *owner_id, item.id),
                        None => context.world.detach_actor(attachment, *owner_id),
                    }
                }
            }
            Action::Damage {
                dealer_id,
                receiver_id,
                hand,
                ..
            } => {
                let swing = match hand {
                    Hand::Left => Animation::SwingLeft,
                    Hand::Right => Animation::SwingRight,
                };
                context.world.play_animation(*dealer_id, swing.name());
                context
                    .world
                    .play_animation(*receiver_id, Animation::Damaged.name());
            }
            Action::PickBegin { who, .. } => {
                context.world.play_animation(*who, Animation::Pick.name());
            }
            Action::PickEnd { who } => {
                context.world.play_animation(*who, Animation::Idle.name());
            }
            // TODO: crafting feedback once the GUI grows a crafting panel.
            Action::CraftBegin { .. } | Action::CraftEnd { .. } => {}
            Action::Idle { actor_id } => {
                context
                    .world
                    .play_animation(*actor_id, Animation::Idle.name());
            }
        }

        // Every policy except motion is one-shot: mark done after the first
        // tick, purged by the scheduler on its next pass.
        if !matches!(&self.action, Action::Motion { .. }) {
            self.expired = true;
        }

        self.tick_count += 1;
    }

    /// Shifts the creation timestamp into the past, letting tests exercise
    /// timeout expiry without sleeping.
    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.created_at -= by;
    }
}

/// Re-evaluates which actor the hero could interact with and updates the
/// highlight. The hero itself is always the closest match, so the candidate
/// is the second entry.
fn refresh_highlight(context: &MotiveContext) {
    let hero_id = context.scene.hero_id();
    let Some(hero_position) = context.scene.actor_position(hero_id) else {
        return;
    };

    let actors = context
        .scene
        .find_closest_actors(&hero_position, MAX_PICK_DISTANCE);
    if actors.len() > 1 {
        context.world.set_highlighted_actor(actors[1]);
    } else {
        context.world.remove_highlight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockGuiPort, MockScenePort, MockWorldPort};
    use meridian_protocol::{
        Actor, DamageVariant, Elevation, EntityInfo, Inventory, Point, Stats,
    };

    const HERO: ActorId = 5;

    fn context(
        scene: MockScenePort,
        world: MockWorldPort,
        gui: MockGuiPort,
    ) -> MotiveContext {
        MotiveContext::new(Arc::new(scene), Arc::new(world), Arc::new(gui))
    }

    /// Scene expectations for one highlight refresh that finds no candidate.
    fn expect_empty_highlight(scene: &mut MockScenePort, world: &mut MockWorldPort) {
        scene.expect_hero_id().return_const(HERO);
        scene
            .expect_actor_position()
            .returning(|_| Some(Point::new(0.0, 0.0)));
        scene
            .expect_find_closest_actors()
            .returning(|_, _| vec![HERO]);
        world.expect_remove_highlight().return_const(());
    }

    fn entity(id: ActorId) -> EntityInfo {
        EntityInfo {
            id,
            essence: "tool".to_string(),
            current_quantity: 1,
            item_volume: 1,
            max_volume: 1,
            codename: "axe".to_string(),
        }
    }

    #[test]
    fn configuration_configures_the_scene() {
        let mut scene = MockScenePort::new();
        scene
            .expect_configure()
            .withf(|hero, elevation| *hero == 7 && elevation.radius == 100.0)
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::Configuration {
            hero_actor_id: 7,
            elevation: Elevation {
                radius: 100.0,
                terrain: vec![],
            },
        });
        motive.tick(
            Duration::from_millis(16),
            &context(scene, MockWorldPort::new(), MockGuiPort::new()),
        );

        assert!(motive.is_expired());
        assert_eq!(motive.actor_id(), None);
    }

    #[test]
    fn motion_moves_by_speed_times_elapsed() {
        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        scene
            .expect_move_actor_by()
            .withf(|actor, distance, bearing| {
                *actor == 3 && (*distance - 0.5).abs() < 1e-6 && *bearing == 1.5
            })
            .times(1)
            .return_const(());
        world
            .expect_play_animation()
            .withf(|actor, animation| *actor == 3 && animation == "walk")
            .times(1)
            .return_const(());
        expect_empty_highlight(&mut scene, &mut world);

        let mut motive = Motive::build(Action::Motion {
            actor_id: 3,
            speed: 2.0,
            bearing: 1.5,
            duration: 10.0,
        });
        motive.tick(
            Duration::from_millis(250),
            &context(scene, world, MockGuiPort::new()),
        );

        assert_eq!(motive.actor_id(), Some(3));
        assert!(!motive.is_expired());
    }

    #[test]
    fn motion_plays_walk_only_on_the_first_tick() {
        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        scene.expect_move_actor_by().times(3).return_const(());
        world
            .expect_play_animation()
            .withf(|_, animation| animation == "walk")
            .times(1)
            .return_const(());
        scene.expect_hero_id().return_const(HERO);
        scene
            .expect_actor_position()
            .returning(|_| Some(Point::new(0.0, 0.0)));
        scene
            .expect_find_closest_actors()
            .returning(|_, _| vec![HERO]);
        world.expect_remove_highlight().return_const(());

        let ctx = context(scene, world, MockGuiPort::new());
        let mut motive = Motive::build(Action::Motion {
            actor_id: 3,
            speed: 1.0,
            bearing: 0.0,
            duration: 10.0,
        });
        for _ in 0..3 {
            motive.tick(Duration::from_millis(16), &ctx);
        }
    }

    #[test]
    fn motion_expires_after_its_duration() {
        let mut motive = Motive::build(Action::Motion {
            actor_id: 3,
            speed: 1.0,
            bearing: 0.0,
            duration: 0.5,
        });

        assert!(!motive.is_expired());

        motive.backdate(Duration::from_millis(600));
        assert!(motive.is_expired());
    }

    #[test]
    fn localization_sets_position_and_idles() {
        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        scene
            .expect_set_actor_position()
            .withf(|actor, theta, phi| *actor == 3 && *theta == 0.25 && *phi == 0.75)
            .times(1)
            .return_const(());
        world
            .expect_play_animation()
            .withf(|actor, animation| *actor == 3 && animation == "idle")
            .times(1)
            .return_const(());
        expect_empty_highlight(&mut scene, &mut world);

        let mut motive = Motive::build(Action::Localization {
            actor_id: 3,
            position: Point::new(0.25, 0.75),
        });
        motive.tick(
            Duration::from_millis(16),
            &context(scene, world, MockGuiPort::new()),
        );

        assert_eq!(motive.actor_id(), Some(3));
        assert!(motive.is_expired());
    }

    #[test]
    fn creation_populates_scene_and_renderers_and_highlights_candidate() {
        let actors = vec![Actor {
            id: 8,
            entity_name: "rocks".to_string(),
            position: Some(Point::new(0.0, 0.0)),
        }];

        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        scene
            .expect_create_actors()
            .withf(|actors: &[Actor]| actors.len() == 1 && actors[0].id == 8)
            .times(1)
            .return_const(());
        world
            .expect_create_renderers()
            .withf(|actors: &[Actor]| actors.len() == 1)
            .times(1)
            .return_const(());
        scene.expect_hero_id().return_const(HERO);
        scene
            .expect_actor_position()
            .returning(|_| Some(Point::new(0.0, 0.0)));
        scene
            .expect_find_closest_actors()
            .returning(|_, _| vec![HERO, 8]);
        world
            .expect_set_highlighted_actor()
            .withf(|actor| *actor == 8)
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::ActorCreation { actors });
        motive.tick(
            Duration::from_millis(16),
            &context(scene, world, MockGuiPort::new()),
        );
    }

    #[test]
    fn deletion_removes_scene_actors_and_renderers() {
        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        scene
            .expect_delete_actors()
            .withf(|ids: &[ActorId]| ids == [4, 5])
            .times(1)
            .return_const(());
        world
            .expect_delete_renderers()
            .withf(|ids: &[ActorId]| ids == [4, 5])
            .times(1)
            .return_const(());
        expect_empty_highlight(&mut scene, &mut world);

        let mut motive = Motive::build(Action::ActorDeletion {
            actor_ids: vec![4, 5],
        });
        motive.tick(
            Duration::from_millis(16),
            &context(scene, world, MockGuiPort::new()),
        );
    }

    #[test]
    fn highlight_refresh_skips_when_hero_is_unplaced() {
        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        scene.expect_delete_actors().return_const(());
        scene.expect_hero_id().return_const(HERO);
        scene.expect_actor_position().returning(|_| None);
        world.expect_delete_renderers().return_const(());
        // No highlight calls expected at all.

        let mut motive = Motive::build(Action::ActorDeletion { actor_ids: vec![4] });
        motive.tick(
            Duration::from_millis(16),
            &context(scene, world, MockGuiPort::new()),
        );
    }

    #[test]
    fn stat_update_feeds_the_gui() {
        let mut gui = MockGuiPort::new();
        gui.expect_set_stats()
            .withf(|stats| stats.hunger == 20.0 && stats.max_hunger == 100.0)
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::StatUpdate {
            actor_id: HERO,
            stats: Stats {
                hunger: 20.0,
                max_hunger: 100.0,
            },
        });
        motive.tick(
            Duration::from_millis(16),
            &context(MockScenePort::new(), MockWorldPort::new(), gui),
        );

        assert!(motive.is_expired());
    }

    #[test]
    fn inventory_update_hides_items_and_reattaches_hands() {
        let inventory = Inventory {
            left_hand: Some(entity(20)),
            right_hand: None,
            entities: Some(vec![Some(entity(21)), None]),
        };

        let mut scene = MockScenePort::new();
        let mut world = MockWorldPort::new();
        let mut gui = MockGuiPort::new();
        gui.expect_set_inventory().times(1).return_const(());
        scene
            .expect_hide_actors()
            .withf(|ids: &[ActorId]| ids == [20, 21])
            .times(1)
            .return_const(());
        world
            .expect_attach_actor()
            .withf(|attachment, base, item| {
                *attachment == Attachment::LeftItem && *base == HERO && *item == 20
            })
            .times(1)
            .return_const(());
        world
            .expect_detach_actor()
            .withf(|attachment, base| *attachment == Attachment::RightItem && *base == HERO)
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::InventoryUpdate {
            owner_id: HERO,
            inventory,
        });
        motive.tick(Duration::from_millis(16), &context(scene, world, gui));
    }

    #[test]
    fn damage_swings_by_hand_and_hurts_the_receiver() {
        let mut world = MockWorldPort::new();
        world
            .expect_play_animation()
            .withf(|actor, animation| *actor == 1 && animation == "swing_right")
            .times(1)
            .return_const(());
        world
            .expect_play_animation()
            .withf(|actor, animation| *actor == 2 && animation == "damaged")
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::Damage {
            dealer_id: 1,
            receiver_id: 2,
            variant: DamageVariant::Hit,
            hand: Hand::Right,
        });
        motive.tick(
            Duration::from_millis(16),
            &context(MockScenePort::new(), world, MockGuiPort::new()),
        );
    }

    #[test]
    fn pick_and_idle_trigger_animations() {
        let mut world = MockWorldPort::new();
        world
            .expect_play_animation()
            .withf(|actor, animation| *actor == 6 && animation == "pick")
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::PickBegin { who: 6, what: 9 });
        motive.tick(
            Duration::from_millis(16),
            &context(MockScenePort::new(), world, MockGuiPort::new()),
        );

        let mut world = MockWorldPort::new();
        world
            .expect_play_animation()
            .withf(|actor, animation| *actor == 6 && animation == "idle")
            .times(1)
            .return_const(());

        let mut motive = Motive::build(Action::PickEnd { who: 6 });
        motive.tick(
            Duration::from_millis(16),
            &context(MockScenePort::new(), world, MockGuiPort::new()),
        );
    }

    #[test]
    fn craft_markers_are_one_shot_noops() {
        let ctx = context(MockScenePort::new(), MockWorldPort::new(), MockGuiPort::new());

        for action in [
            Action::CraftBegin { crafter_id: 9 },
            Action::CraftEnd { crafter_id: 9 },
        ] {
            let mut motive = Motive::build(action);
            assert!(!motive.is_expired());
            motive.tick(Duration::from_millis(16), &ctx);
            assert!(motive.is_expired());
        }
    }
}
