//! Damage application and death systems.

use bevy::prelude::*;

use crate::arena::{AnimationSignalEvent, DeathSchedule, SignalBuffer};
use crate::combat::{apply_hit, DamageDealt, DamageRequest, EntityDied, HitSway, SwayParams};
use crate::components::{
    CollisionDisabled, CombatTarget, DamageOutcome, Dead, DeathGrace, Health,
};

/// Система: apply queued `DamageRequest`s
///
/// Every request goes through `apply_hit`. Puppet signals are forwarded as
/// `AnimationSignalEvent`s; a killing blow marks the actor `Dead`, drops it
/// out of collision, unbinds its target and schedules the despawn.
pub fn apply_damage_requests(
    mut commands: Commands,
    mut requests: EventReader<DamageRequest>,
    mut dealt: EventWriter<DamageDealt>,
    mut died: EventWriter<EntityDied>,
    mut anim_events: EventWriter<AnimationSignalEvent>,
    mut targets: Query<(
        &mut Health,
        Option<&DeathGrace>,
        Option<&mut HitSway>,
        Option<&SwayParams>,
    )>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for request in requests.read() {
        let Ok((mut health, grace, mut sway, sway_params)) = targets.get_mut(request.target) else {
            crate::logger::log_warning(&format!(
                "⚠️ DamageRequest for missing actor {:?}, ignored",
                request.target
            ));
            continue;
        };

        let mut signals = SignalBuffer::default();
        let mut schedule = DeathSchedule::default();
        let grace = grace.copied().unwrap_or_default().seconds;

        let outcome = apply_hit(
            &mut health,
            request.amount,
            request.side,
            grace,
            &mut signals,
            &mut schedule,
            sway.as_deref_mut().zip(sway_params),
        );

        let (remaining, target_died) = match outcome {
            DamageOutcome::Ignored => continue,
            DamageOutcome::Wounded { remaining } => (remaining, false),
            DamageOutcome::Killed { remaining } => (remaining, true),
        };

        signals.flush(request.target, &mut anim_events);

        crate::logger::log(&format!(
            "💥 {:?} took {} damage from {:?} (HP left: {})",
            request.target, request.amount, request.source, remaining
        ));

        dealt.write(DamageDealt {
            attacker: request.source,
            target: request.target,
            damage: request.amount,
            remaining,
            target_died,
        });

        if target_died {
            if let Ok(mut entity_commands) = commands.get_entity(request.target) {
                entity_commands
                    .insert((Dead, CollisionDisabled))
                    .remove::<CombatTarget>();
                if let Some(marker) = schedule.despawn_marker(now) {
                    entity_commands.insert(marker);
                }
            }

            died.write(EntityDied {
                entity: request.target,
                killer: request.source,
            });

            crate::logger::log_info(&format!(
                "☠️ {:?} died (killer: {:?})",
                request.target, request.source
            ));
        }
    }
}
