//! Enemy AI module
//!
//! Melee chaser bound to one target at spawn:
//! - chase: rate-limited turning, approach until stopping distance
//! - enemy: `advance_enemy` (navigation + delayed cone-cast punches)
//! - systems: ECS glue

use bevy::prelude::*;

pub mod chase;
pub mod enemy;
pub mod systems;

pub use chase::*;
pub use enemy::*;
pub use systems::*;

use crate::arena::capture_bodies;
use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует enemy системы в FixedUpdate.
/// Порядок выполнения:
/// 1. capture_bodies — re-snapshot тел (игрок уже сдвинулся в этом тике)
/// 2. enemy_frame — chase + attack, DamageRequest на попадание
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (capture_bodies, enemy_frame)
                .chain()
                .in_set(SimulationSet::Enemy),
        );
    }
}
