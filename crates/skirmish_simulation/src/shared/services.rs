//! Collaborator contracts.
//!
//! The simulation core never talks to an engine directly. Each actor update
//! receives these collaborators as trait objects, bound once at spawn time or
//! built per tick by the systems (see `crate::arena` for headless versions).
//!
//! # Contracts
//! - `SpatialQuery`: nearest blocking surface along a ray + what it was
//! - `KinematicMover`: collision-aware position update
//! - `AnimationDriver`: write-only puppet signals
//! - `DisplaySink`: write-only HUD strings
//! - `LifecycleManager`: "destroy after delay" requests

use bevy::prelude::*;

use crate::combat::PunchSide;
use crate::components::{ActorTag, Body};

// ============================================================================
// Spatial queries
// ============================================================================

/// Category of a surface reported by a raycast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SurfaceTag {
    /// Walkable floor
    Ground,
    /// Static level geometry (walls, crates)
    Obstacle,
    /// Body of a living actor
    Actor(ActorTag),
}

impl SurfaceTag {
    pub fn is_actor(&self, tag: ActorTag) -> bool {
        *self == SurfaceTag::Actor(tag)
    }
}

/// Nearest hit along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Entity owning the surface (None for level geometry)
    pub entity: Option<Entity>,
    pub point: Vec3,
    pub distance: f32,
    pub tag: SurfaceTag,
}

pub trait SpatialQuery {
    /// Cast a ray and return the nearest blocking surface within `max_distance`.
    ///
    /// `direction` need not be normalized. A ray starting inside a body does
    /// not report that body.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;
}

// ============================================================================
// Kinematic mover
// ============================================================================

pub trait KinematicMover {
    /// Move a body from `from` by `delta`, respecting collision geometry.
    /// Returns the resulting position.
    fn move_body(&mut self, from: Vec3, delta: Vec3, body: &Body) -> Vec3;
}

// ============================================================================
// Animation puppet
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum AnimTrigger {
    Attack,
    Hit,
    Die,
}

impl AnimTrigger {
    /// Parameter name on the animation controller side.
    pub fn name(&self) -> &'static str {
        match self {
            AnimTrigger::Attack => "Attack",
            AnimTrigger::Hit => "Hit",
            AnimTrigger::Die => "Die",
        }
    }
}

/// Discrete signal to the animation puppet. The core never reads animation state back.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum AnimSignal {
    Trigger(AnimTrigger),
    /// Normalized locomotion speed ("Speed" float)
    Speed(f32),
    /// Which hand the next punch uses ("PunchIndex" int)
    PunchSide(PunchSide),
}

pub trait AnimationDriver {
    fn signal(&mut self, signal: AnimSignal);
}

// ============================================================================
// HUD + lifecycle
// ============================================================================

pub trait DisplaySink {
    fn show_health(&mut self, text: &str);
    fn show_stamina(&mut self, text: &str);
}

pub trait LifecycleManager {
    /// Schedule removal of the actor after `delay` seconds.
    fn destroy_after(&mut self, delay: f32);
}
