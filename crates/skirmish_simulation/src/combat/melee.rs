//! Cone-cast melee hit detection.
//!
//! A punch is approximated by a fan of `CONE_RAY_COUNT` rays spread evenly
//! over [-half_angle, +half_angle] around the attacker's facing. Rays are cast
//! in fan order (low angle to high, left to right); the first one that reports the target's
//! tag is the hit and the scan stops there. Rays that hit anything else are
//! recorded and the scan continues.

use bevy::prelude::*;

use crate::components::ActorTag;
use crate::logger;
use crate::shared::{SpatialQuery, SurfaceTag};

use super::components::MeleeParams;

/// Rays per cone cast.
pub const CONE_RAY_COUNT: usize = 9;

/// Facing used when the supplied one has no length.
const FALLBACK_FORWARD: Vec3 = Vec3::NEG_Z;

/// What a single ray of the fan ran into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayOutcome {
    /// Nothing within range
    Miss,
    /// Something that is not the target
    Blocked { tag: SurfaceTag, distance: f32 },
    /// The target
    Target { distance: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    pub index: usize,
    /// Yaw offset from facing (degrees)
    pub angle: f32,
    pub direction: Vec3,
    pub outcome: RayOutcome,
}

/// Everything a cone cast did, in fan order.
///
/// `rays` stops at the hit ray when the scan short-circuits.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeCastReport {
    pub origin: Vec3,
    pub range: f32,
    pub rays: Vec<RaySample>,
    /// Index of the ray that hit the target
    pub hit_index: Option<usize>,
}

impl ConeCastReport {
    pub fn landed(&self) -> bool {
        self.hit_index.is_some()
    }
}

/// Evenly spaced yaw offsets (degrees) from -half_angle to +half_angle inclusive.
pub fn cone_ray_angles(half_angle: f32) -> [f32; CONE_RAY_COUNT] {
    let step = (half_angle * 2.0) / (CONE_RAY_COUNT as f32 - 1.0);
    std::array::from_fn(|i| -half_angle + step * i as f32)
}

/// Ray directions of the fan around `forward` (unit length).
///
/// Positive angles turn toward the actor's right (clockwise seen from above),
/// so ray 0 is the leftmost.
pub fn cone_ray_directions(forward: Vec3, half_angle: f32) -> [Vec3; CONE_RAY_COUNT] {
    let forward = forward.try_normalize().unwrap_or(FALLBACK_FORWARD);
    let angles = cone_ray_angles(half_angle);
    std::array::from_fn(|i| {
        (Quat::from_rotation_y(-angles[i].to_radians()) * forward)
            .try_normalize()
            .unwrap_or(FALLBACK_FORWARD)
    })
}

/// Unsigned angle (degrees) between facing and the direction to a target.
///
/// Degenerate vectors (target on top of the attacker, zero facing) count as 0°.
pub fn facing_angle(forward: Vec3, to_target: Vec3) -> f32 {
    let (Some(forward), Some(to_target)) = (forward.try_normalize(), to_target.try_normalize())
    else {
        return 0.0;
    };
    forward.dot(to_target).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Attack start gate: within range and inside the facing cone.
pub fn target_in_reach(
    position: Vec3,
    forward: Vec3,
    target_position: Vec3,
    params: &MeleeParams,
) -> bool {
    let to_target = target_position - position;
    if to_target.length() > params.range {
        return false;
    }
    facing_angle(forward, to_target) <= params.cone_half_angle
}

/// Cast the fan and stop at the first ray that hits `target_tag`.
pub fn cone_cast(
    spatial: &dyn SpatialQuery,
    origin: Vec3,
    forward: Vec3,
    half_angle: f32,
    range: f32,
    target_tag: ActorTag,
) -> ConeCastReport {
    let angles = cone_ray_angles(half_angle);
    let directions = cone_ray_directions(forward, half_angle);

    let mut rays = Vec::with_capacity(CONE_RAY_COUNT);
    let mut hit_index = None;

    for (index, (angle, direction)) in angles.into_iter().zip(directions).enumerate() {
        let outcome = match spatial.cast_ray(origin, direction, range) {
            Some(hit) if hit.tag.is_actor(target_tag) => RayOutcome::Target {
                distance: hit.distance,
            },
            Some(hit) => RayOutcome::Blocked {
                tag: hit.tag,
                distance: hit.distance,
            },
            None => RayOutcome::Miss,
        };

        rays.push(RaySample {
            index,
            angle,
            direction,
            outcome,
        });

        if matches!(outcome, RayOutcome::Target { .. }) {
            hit_index = Some(index);
            break;
        }
    }

    ConeCastReport {
        origin,
        range,
        rays,
        hit_index,
    }
}

/// Debug-level dump of a cone cast (one line per ray).
pub fn log_cone_cast(attacker: Entity, report: &ConeCastReport) {
    if !logger::enabled(logger::LogLevel::Debug) {
        return;
    }

    for ray in &report.rays {
        let line = match ray.outcome {
            RayOutcome::Miss => format!("miss (len {:.2})", report.range),
            RayOutcome::Blocked { tag, distance } => format!("blocked by {:?} at {:.2}", tag, distance),
            RayOutcome::Target { distance } => format!("TARGET at {:.2}", distance),
        };
        logger::log(&format!(
            "🔍 cone ray {} ({:+.1}°) from {:?}: {}",
            ray.index, ray.angle, attacker, line
        ));
    }
}
