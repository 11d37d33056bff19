//! Headless raycasts: ground plane, box obstacles, actor cylinders.

use bevy::prelude::*;

use crate::components::{Actor, ActorTag, Body, CollisionDisabled};
use crate::shared::{RayHit, SpatialQuery, SurfaceTag};

/// Axis-aligned box of static level geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub min: Vec3,
    pub max: Vec3,
}

impl Obstacle {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Entry distance of a ray (unit `dir`) into the box, slab method.
    ///
    /// Rays starting inside the box report nothing.
    fn ray_entry(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        if self.contains(origin) {
            return None;
        }

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;

        for axis in 0..3 {
            let (o, d, lo, hi) = (origin[axis], dir[axis], self.min[axis], self.max[axis]);
            if d.abs() < f32::EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let (t0, t1) = ((lo - o) / d, (hi - o) / d);
            t_near = t_near.max(t0.min(t1));
            t_far = t_far.min(t0.max(t1));
        }

        (t_near <= t_far && t_near >= 0.0).then_some(t_near)
    }

    /// True if a standing cylinder at `base` overlaps the box.
    pub fn overlaps_body(&self, base: Vec3, body: &Body) -> bool {
        if base.y + body.height <= self.min.y || base.y >= self.max.y {
            return false;
        }
        let closest_x = base.x.clamp(self.min.x, self.max.x);
        let closest_z = base.z.clamp(self.min.z, self.max.z);
        let dx = base.x - closest_x;
        let dz = base.z - closest_z;
        dx * dx + dz * dz < body.radius * body.radius
    }
}

/// Static level layout.
#[derive(Resource, Debug, Clone, Default)]
pub struct ArenaGeometry {
    /// Height of the flat floor
    pub ground_height: f32,
    pub obstacles: Vec<Obstacle>,
}

/// Actor body as seen by raycasts this step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyEntry {
    pub entity: Entity,
    pub tag: ActorTag,
    /// Base (feet) position
    pub position: Vec3,
    pub body: Body,
}

impl BodyEntry {
    fn contains(&self, point: Vec3) -> bool {
        let dx = point.x - self.position.x;
        let dz = point.z - self.position.z;
        dx * dx + dz * dz <= self.body.radius * self.body.radius
            && point.y >= self.position.y
            && point.y <= self.position.y + self.body.height
    }

    /// Nearest entry distance of a ray (unit `dir`) into the cylinder.
    fn ray_entry(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        if self.contains(origin) {
            return None;
        }

        let radius_sq = self.body.radius * self.body.radius;
        let bottom = self.position.y;
        let top = self.position.y + self.body.height;
        let ox = origin.x - self.position.x;
        let oz = origin.z - self.position.z;

        let mut nearest: Option<f32> = None;
        let mut consider = |t: f32| {
            if t >= 0.0 && nearest.is_none_or(|n| t < n) {
                nearest = Some(t);
            }
        };

        // Side wall
        let a = dir.x * dir.x + dir.z * dir.z;
        if a > f32::EPSILON {
            let b = 2.0 * (ox * dir.x + oz * dir.z);
            let c = ox * ox + oz * oz - radius_sq;
            let disc = b * b - 4.0 * a * c;
            if disc >= 0.0 {
                let t = (-b - disc.sqrt()) / (2.0 * a);
                let y = origin.y + t * dir.y;
                if y >= bottom && y <= top {
                    consider(t);
                }
            }
        }

        // Caps
        if dir.y.abs() > f32::EPSILON {
            for cap in [bottom, top] {
                let t = (cap - origin.y) / dir.y;
                let px = ox + t * dir.x;
                let pz = oz + t * dir.z;
                if px * px + pz * pz <= radius_sq {
                    consider(t);
                }
            }
        }

        nearest
    }
}

/// Actor bodies captured once per step (dead bodies excluded).
#[derive(Resource, Debug, Clone, Default)]
pub struct BodySnapshot {
    pub bodies: Vec<BodyEntry>,
}

/// System: refresh `BodySnapshot` from live actors.
pub fn capture_bodies(
    mut snapshot: ResMut<BodySnapshot>,
    actors: Query<(Entity, &Actor, &Transform, &Body), Without<CollisionDisabled>>,
) {
    snapshot.bodies = actors
        .iter()
        .map(|(entity, actor, transform, body)| BodyEntry {
            entity,
            tag: actor.tag,
            position: transform.translation,
            body: *body,
        })
        .collect();
    snapshot.bodies.sort_by_key(|entry| entry.entity.index());
}

/// `SpatialQuery` over the arena geometry plus a body snapshot.
pub struct ArenaSpace<'a> {
    pub geometry: &'a ArenaGeometry,
    pub bodies: &'a [BodyEntry],
}

impl<'a> ArenaSpace<'a> {
    pub fn new(geometry: &'a ArenaGeometry, snapshot: &'a BodySnapshot) -> Self {
        Self {
            geometry,
            bodies: &snapshot.bodies,
        }
    }
}

impl SpatialQuery for ArenaSpace<'_> {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let dir = direction.try_normalize()?;
        let mut best: Option<(f32, Option<Entity>, SurfaceTag)> = None;
        let mut consider = |t: f32, entity: Option<Entity>, tag: SurfaceTag| {
            if t <= max_distance && best.is_none_or(|(b, _, _)| t < b) {
                best = Some((t, entity, tag));
            }
        };

        let ground = self.geometry.ground_height;
        if dir.y < 0.0 && origin.y >= ground {
            consider((origin.y - ground) / -dir.y, None, SurfaceTag::Ground);
        }

        for obstacle in &self.geometry.obstacles {
            if let Some(t) = obstacle.ray_entry(origin, dir) {
                consider(t, None, SurfaceTag::Obstacle);
            }
        }

        for entry in self.bodies {
            if let Some(t) = entry.ray_entry(origin, dir) {
                consider(t, Some(entry.entity), SurfaceTag::Actor(entry.tag));
            }
        }

        best.map(|(distance, entity, tag)| RayHit {
            entity,
            point: origin + dir * distance,
            distance,
            tag,
        })
    }
}
