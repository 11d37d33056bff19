//! Chase steering on the horizontal plane.

use bevy::prelude::*;

use crate::components::{ChaseParams, MotionParams};
use crate::movement::world_to_local;

/// Yaw (radians) of a rotation whose forward (-Z) points along `direction`.
pub fn yaw_of(direction: Vec3) -> f32 {
    (-direction.x).atan2(-direction.z)
}

/// Wrap an angle to (-π, π].
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + std::f32::consts::PI).rem_euclid(std::f32::consts::TAU) - std::f32::consts::PI;
    if wrapped <= -std::f32::consts::PI {
        wrapped + std::f32::consts::TAU
    } else {
        wrapped
    }
}

/// Turn `rotation` toward `to_target` (horizontal) by at most `max_step` radians.
///
/// A target straight above/below (no horizontal offset) leaves the rotation as is.
pub fn turn_toward(rotation: Quat, to_target: Vec3, max_step: f32) -> Quat {
    let flat = Vec3::new(to_target.x, 0.0, to_target.z);
    if flat.length_squared() < 1e-8 {
        return rotation;
    }

    let current = yaw_of(rotation * Vec3::NEG_Z);
    let delta = wrap_angle(yaw_of(flat) - current);
    let step = delta.clamp(-max_step, max_step);

    Quat::from_rotation_y(current + step)
}

/// Local move axes that walk toward the target, zero once within stopping distance.
pub fn chase_axes(rotation: Quat, to_target: Vec3, params: &ChaseParams) -> Vec2 {
    let flat = Vec3::new(to_target.x, 0.0, to_target.z);
    if flat.length() <= params.stopping_distance {
        return Vec2::ZERO;
    }
    world_to_local(rotation, flat.normalize_or_zero())
}

/// Locomotion tuning for chasing: walk at chase speed with chase smoothing.
pub fn chase_motion(base: &MotionParams, params: &ChaseParams) -> MotionParams {
    MotionParams {
        walk_speed: params.chase_speed,
        run_speed: params.chase_speed,
        acceleration: params.acceleration,
        ..*base
    }
}
