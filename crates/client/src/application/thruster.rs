//! The per-frame scheduler.
//!
//! The [`Thruster`] is the hand-off point between the network thread and the
//! render thread. The receive loop submits freshly built motives; the render
//! thread calls [`Thruster::thrust`] once per frame to purge expired motives
//! and tick the live ones. One coarse lock covers both sides; motive effects
//! are non-blocking and never re-enter the scheduler, so nothing finer is
//! needed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use meridian_protocol::ActorId;

use crate::application::motive::{Motive, MotiveContext};

struct MotiveStore {
    /// Motives with no actor affinity, ticked in insertion order.
    general: Vec<Motive>,
    /// At most one live motive per actor; a newer submission replaces the
    /// older one outright.
    actor: HashMap<ActorId, Motive>,
    prev_tick: Instant,
}

pub struct Thruster {
    context: MotiveContext,
    store: Mutex<MotiveStore>,
}

impl Thruster {
    pub fn new(context: MotiveContext) -> Self {
        Self {
            context,
            store: Mutex::new(MotiveStore {
                general: Vec::new(),
                actor: HashMap::new(),
                prev_tick: Instant::now(),
            }),
        }
    }

    /// Stores a motive for the next frame. Callable from any thread.
    pub fn submit(&self, motive: Motive) {
        let mut store = self.store.lock().expect("motive store lock poisoned");

        match motive.actor_id() {
            Some(actor_id) => {
                store.actor.insert(actor_id, motive);
            }
            None => store.general.push(motive),
        }
    }

    /// One frame: purge expired motives, then tick every live one with the
    /// wall-clock time elapsed since the previous call. A motive expiring
    /// during its own tick is purged on the next call, not this one.
    pub fn thrust(&self) {
        let now = Instant::now();
        let mut store = self.store.lock().expect("motive store lock poisoned");

        let elapsed = now - store.prev_tick;
        store.prev_tick = now;

        store.general.retain(|motive| !motive.is_expired());
        store.actor.retain(|_, motive| !motive.is_expired());

        for motive in &mut store.general {
            motive.tick(elapsed, &self.context);
        }
        for motive in store.actor.values_mut() {
            motive.tick(elapsed, &self.context);
        }
    }

    /// Number of live motives (general plus actor-keyed).
    pub fn motive_count(&self) -> usize {
        let store = self.store.lock().expect("motive store lock poisoned");
        store.general.len() + store.actor.len()
    }

    /// Whether an actor currently has a pending motive.
    pub fn has_actor_motive(&self, actor_id: ActorId) -> bool {
        let store = self.store.lock().expect("motive store lock poisoned");
        store.actor.contains_key(&actor_id)
    }
}
