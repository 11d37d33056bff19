//! Headless arena: in-process stand-ins for the engine collaborators
//!
//! - space: `SpatialQuery` over a flat floor, box obstacles, actor cylinders
//! - mover: `KinematicMover` (floor clamp, obstacle rejection) + actor separation
//! - puppet: `AnimationDriver` buffer, `AnimationSignalEvent`, `Puppet`
//! - hud: `DisplaySink` resource
//! - lifecycle: `LifecycleManager` → `DespawnAfter`, despawn system

pub mod hud;
pub mod lifecycle;
pub mod mover;
pub mod puppet;
pub mod space;

pub use hud::*;
pub use lifecycle::*;
pub use mover::*;
pub use puppet::*;
pub use space::*;

use bevy::prelude::*;

use crate::SimulationSet;

/// Arena Plugin
///
/// Ресурсы headless-арены и служебные системы:
/// - capture_bodies (Sense): снимок тел для raycasts игрока
/// - separate_actors, drive_puppets (Cleanup): раздвигание тел, анимационные сигналы
///
/// `ArenaGeometry` вставленная заранее (из конфига) не перезаписывается.
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaGeometry>()
            .init_resource::<BodySnapshot>()
            .init_resource::<HudText>()
            .add_event::<AnimationSignalEvent>();

        app.add_systems(
            FixedUpdate,
            (
                capture_bodies.in_set(SimulationSet::Sense),
                (separate_actors, drive_puppets).in_set(SimulationSet::Cleanup),
            ),
        );
    }
}
