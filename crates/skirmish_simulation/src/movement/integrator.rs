//! Motion integrator
//!
//! Per tick:
//! 1. target horizontal velocity = local→world(move) × (walk | run) × clamp01(|move|)
//! 2. horizontal velocity = lerp(current, target, clamp01(acceleration × dt))
//! 3. vertical velocity: ground stick / jump impulse when grounded, gravity otherwise
//! 4. position delta = (horizontal + vertical) × dt, handed to the mover
//!
//! The smoothing is a first-order lag: a constant target is approached
//! monotonically and never overshot.

use bevy::prelude::*;

use crate::components::{MotionParams, MotionState};

/// Vertical velocity applied while standing, keeps the body pressed to the floor.
pub const GROUND_STICK_VELOCITY: f32 = -0.1;

/// Inputs below this magnitude are not normalized.
const MIN_MOVE_MAGNITUDE: f32 = 0.01;

/// Movement intent for one tick, in actor-local axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionIntent {
    /// x = strafe (right positive), y = forward
    pub local_move: Vec2,
    /// Sprint granted for this tick (already gated by stamina)
    pub sprint: bool,
    pub jump: bool,
}

impl MotionIntent {
    pub fn walk(local_move: Vec2) -> Self {
        Self {
            local_move,
            ..default()
        }
    }
}

/// Actor-local (strafe, forward) → world horizontal vector.
///
/// Forward is the rotation's -Z, right is its +X; the result is flattened.
pub fn local_to_world(rotation: Quat, local: Vec2) -> Vec3 {
    let right = rotation * Vec3::X;
    let forward = rotation * Vec3::NEG_Z;
    let world = right * local.x + forward * local.y;
    Vec3::new(world.x, 0.0, world.z)
}

/// World horizontal vector → actor-local (strafe, forward).
pub fn world_to_local(rotation: Quat, world: Vec3) -> Vec2 {
    let local = rotation.inverse() * Vec3::new(world.x, 0.0, world.z);
    Vec2::new(local.x, -local.z)
}

/// Velocity the smoothing pulls toward this tick.
pub fn target_horizontal_velocity(
    rotation: Quat,
    intent: &MotionIntent,
    params: &MotionParams,
) -> Vec3 {
    let magnitude = intent.local_move.length();
    let direction = if magnitude > MIN_MOVE_MAGNITUDE {
        intent.local_move / magnitude
    } else {
        intent.local_move
    };

    let speed = if intent.sprint {
        params.run_speed
    } else {
        params.walk_speed
    };

    local_to_world(rotation, direction) * speed * magnitude.clamp(0.0, 1.0)
}

/// Advance `state` by one tick and return the position delta to apply.
///
/// `grounded` comes from the ground probe of this tick.
pub fn integrate_motion(
    state: &mut MotionState,
    params: &MotionParams,
    intent: &MotionIntent,
    rotation: Quat,
    grounded: bool,
    dt: f32,
) -> Vec3 {
    state.grounded = grounded;

    let target = target_horizontal_velocity(rotation, intent, params);
    let blend = (params.acceleration * dt).clamp(0.0, 1.0);
    state.horizontal_velocity = state.horizontal_velocity.lerp(target, blend);

    if grounded {
        if state.vertical_velocity < 0.0 {
            state.vertical_velocity = GROUND_STICK_VELOCITY;
        }
        if intent.jump {
            state.vertical_velocity = params.jump_velocity();
        }
    } else {
        state.vertical_velocity += params.gravity * dt;
    }

    state.velocity() * dt
}
