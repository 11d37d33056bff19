//! Movement components: integrated velocity, tuning, ground probe

use bevy::prelude::*;

/// Integrated motion of one actor (mutated every tick by the integrator).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MotionState {
    /// Smoothed horizontal velocity (world space, y = 0)
    pub horizontal_velocity: Vec3,
    /// Vertical velocity (m/s, up positive)
    pub vertical_velocity: f32,
    /// Ground probe result of the last tick
    pub grounded: bool,
}

impl MotionState {
    pub fn horizontal_speed(&self) -> f32 {
        self.horizontal_velocity.length()
    }

    pub fn velocity(&self) -> Vec3 {
        self.horizontal_velocity + Vec3::Y * self.vertical_velocity
    }
}

/// Locomotion tuning for one actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MotionParams {
    /// m/s
    pub walk_speed: f32,
    /// m/s while sprinting
    pub run_speed: f32,
    /// Smoothing rate: lerp factor per second (clamped to 1 per step)
    pub acceleration: f32,
    /// m/s² (negative = down)
    pub gravity: f32,
    /// Apex height of a jump (m)
    pub jump_height: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            acceleration: 20.0,
            gravity: -9.81,
            jump_height: 1.5,
        }
    }
}

impl MotionParams {
    /// Initial vertical speed that reaches `jump_height` under `gravity`.
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).max(0.0).sqrt()
    }
}

/// Downward ground probe.
///
/// Ray from `base + up * origin_lift`, length `origin_lift + check_distance`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GroundProbe {
    pub origin_lift: f32,
    pub check_distance: f32,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            origin_lift: 0.1,
            check_distance: 0.4,
        }
    }
}

impl GroundProbe {
    pub fn origin(&self, base: Vec3) -> Vec3 {
        base + Vec3::Y * self.origin_lift
    }

    pub fn ray_length(&self) -> f32 {
        self.origin_lift + self.check_distance
    }
}
