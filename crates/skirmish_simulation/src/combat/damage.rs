//! Damage application and the death transition.
//!
//! Every source of damage (enemy punches, external requests) goes through
//! `apply_hit`:
//! - health -= amount
//! - puppet gets a `Hit` trigger, a swaying actor starts its sway
//! - on the killing blow: `Die` trigger + removal scheduled after the grace delay
//! - once dead nothing is processed again

use bevy::prelude::*;

use crate::combat::{HitSway, PunchSide, SwayParams};
use crate::components::{DamageOutcome, Health};
use crate::shared::{AnimSignal, AnimTrigger, AnimationDriver, LifecycleManager};

/// Event: request to damage an actor
///
/// Written by the enemy melee resolver; hosts may write it too (e.g. a
/// player weapon living outside this crate).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageRequest {
    pub target: Entity,
    pub amount: i32,
    /// Hand that landed the punch (drives the victim's sway)
    pub side: Option<PunchSide>,
    pub source: Option<Entity>,
}

/// Event: damage was applied
///
/// Used by HUD/audio/VFX observers.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct DamageDealt {
    pub attacker: Option<Entity>,
    pub target: Entity,
    pub damage: i32,
    pub remaining: i32,
    pub target_died: bool,
}

/// Event: actor died (emitted exactly once per actor)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Apply one hit to an actor and fire its reactions.
pub fn apply_hit(
    health: &mut Health,
    amount: i32,
    side: Option<PunchSide>,
    death_grace: f32,
    anim: &mut dyn AnimationDriver,
    lifecycle: &mut dyn LifecycleManager,
    sway: Option<(&mut HitSway, &SwayParams)>,
) -> DamageOutcome {
    let outcome = health.apply_damage(amount);
    if outcome == DamageOutcome::Ignored {
        return outcome;
    }

    anim.signal(AnimSignal::Trigger(AnimTrigger::Hit));

    if let (Some(side), Some((sway, params))) = (side, sway) {
        sway.receive_hit(side, params);
    }

    if let DamageOutcome::Killed { .. } = outcome {
        anim.signal(AnimSignal::Trigger(AnimTrigger::Die));
        lifecycle.destroy_after(death_grace);
    }

    outcome
}
