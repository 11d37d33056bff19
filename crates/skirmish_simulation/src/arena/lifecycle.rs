//! Headless lifecycle: turns `destroy_after` requests into `DespawnAfter`.

use bevy::prelude::*;

use crate::components::DespawnAfter;
use crate::shared::LifecycleManager;

/// `LifecycleManager` recording the removal request of one actor update.
#[derive(Debug, Default)]
pub struct DeathSchedule {
    pub delay: Option<f32>,
}

impl LifecycleManager for DeathSchedule {
    fn destroy_after(&mut self, delay: f32) {
        self.delay = Some(delay.max(0.0));
    }
}

impl DeathSchedule {
    /// Despawn marker for a request made at clock `now`.
    pub fn despawn_marker(&self, now: f32) -> Option<DespawnAfter> {
        self.delay.map(|delay| DespawnAfter {
            despawn_time: now + delay,
        })
    }
}

/// System: remove entities whose `DespawnAfter` time has passed.
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time<Fixed>>,
) {
    let current_time = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if current_time >= despawn_after.despawn_time {
            crate::logger::log(&format!("⚰️ Despawning entity {:?} (timeout)", entity));
            commands.entity(entity).despawn();
        }
    }
}
