//! Base actor components: Actor, Body, Health, death markers

use bevy::prelude::*;

use crate::components::MotionState;

/// Which side of the duel an actor is on.
///
/// Used as the category tag for raycast hits and target selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ActorTag {
    Player,
    Enemy,
}

impl ActorTag {
    pub fn opponent(&self) -> ActorTag {
        match self {
            ActorTag::Player => ActorTag::Enemy,
            ActorTag::Enemy => ActorTag::Player,
        }
    }
}

/// Actor (player or enemy) — base component for living things
///
/// Transform is the actor base (feet) position; yaw lives in its rotation.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Transform, MotionState)]
pub struct Actor {
    pub tag: ActorTag,
}

/// Collision body: vertical cylinder standing on the actor base.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Body {
    pub radius: f32,
    pub height: f32,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 2.0,
        }
    }
}

/// Result of a damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Damage applied, actor still alive
    Wounded { remaining: i32 },
    /// This application crossed zero: the actor is now dead
    Killed { remaining: i32 },
    /// Actor was already dead, nothing changed
    Ignored,
}

/// Actor health
///
/// `current` may go below zero on the killing blow (a 100 HP actor hit by
/// 30 and then 80 ends at -10). Death is latched in `dead` and is terminal.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    dead: bool,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            dead: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Subtract `amount`. The first application that leaves health ≤ 0
    /// returns `Killed`; every later call is `Ignored`.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.dead {
            return DamageOutcome::Ignored;
        }

        self.current -= amount;

        if self.current <= 0 {
            self.dead = true;
            DamageOutcome::Killed {
                remaining: self.current,
            }
        } else {
            DamageOutcome::Wounded {
                remaining: self.current,
            }
        }
    }
}

/// Marker: actor is dead (terminal)
///
/// Dead actors are skipped by every per-frame system.
#[derive(Component, Debug)]
pub struct Dead;

/// Marker: body no longer takes part in raycasts and separation.
#[derive(Component, Debug)]
pub struct CollisionDisabled;

/// Despawn the entity once the simulation clock passes `despawn_time`.
#[derive(Component, Debug)]
pub struct DespawnAfter {
    /// Clock value (seconds since start)
    pub despawn_time: f32,
}

/// Grace delay between death and removal (lets the death animation play).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct DeathGrace {
    pub seconds: f32,
}

impl Default for DeathGrace {
    fn default() -> Self {
        Self { seconds: 2.0 }
    }
}
