//! Combat system module
//!
//! Pure core:
//! - components: Stamina, AttackState/MeleeParams/PunchSide, HitSway
//! - melee: cone-cast hit detection (9-ray fan)
//! - damage: `apply_hit` (HealthModel + hit reactions), damage events
//!
//! ECS side (systems): `DamageRequest` → `apply_hit` → DamageDealt / EntityDied.

use bevy::prelude::*;

pub mod components;
pub mod damage;
pub mod melee;
pub mod systems;


// Re-export основных типов
pub use components::*;
pub use damage::*;
pub use melee::*;
pub use systems::apply_damage_requests;

use crate::arena::despawn_after_timeout;
use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует damage события и системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. apply_damage_requests (Resolve) — DamageRequest → health, reactions, death
/// 2. despawn_after_timeout (Cleanup) — уборка мёртвых после grace delay
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<DamageRequest>()
            .add_event::<DamageDealt>()
            .add_event::<EntityDied>();

        app.add_systems(
            FixedUpdate,
            (
                apply_damage_requests.in_set(SimulationSet::Resolve),
                despawn_after_timeout.in_set(SimulationSet::Cleanup),
            ),
        );
    }
}
