//! Enemy AI components: binding to the target, chase tuning

use bevy::prelude::*;

/// Marker: enemy-controlled actor
#[derive(Component, Debug, Default)]
pub struct Enemy;

/// Bound target of an enemy.
///
/// Set once at spawn (no runtime search). `None` or a target that no longer
/// exists means the enemy skips its whole frame until the binding is valid.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct CombatTarget(pub Option<Entity>);

impl CombatTarget {
    pub fn entity(&self) -> Option<Entity> {
        self.0
    }
}

/// Chase (navigation) tuning.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct ChaseParams {
    /// m/s
    pub chase_speed: f32,
    /// Stop approaching at this horizontal distance (m)
    pub stopping_distance: f32,
    /// Max turn rate (degrees/sec)
    pub angular_speed: f32,
    /// Velocity smoothing rate
    pub acceleration: f32,
}

impl Default for ChaseParams {
    fn default() -> Self {
        Self {
            chase_speed: 3.5,
            stopping_distance: 2.0,
            angular_speed: 360.0,
            acceleration: 8.0,
        }
    }
}

/// Tracks whether the last frame was skipped (logs only on transitions).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BindingStatus {
    pub skipping: bool,
}
