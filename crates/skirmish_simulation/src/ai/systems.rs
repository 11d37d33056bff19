//! Enemy ECS systems.

use bevy::prelude::*;

use crate::arena::{AnimationSignalEvent, ArenaGeometry, ArenaMover, ArenaSpace, BodySnapshot, SignalBuffer};
use crate::combat::{AttackState, DamageRequest, DebugRays, MeleeParams};
use crate::components::{
    Actor, BindingStatus, Body, ChaseParams, CombatTarget, Dead, Enemy, GroundProbe, Health,
    MotionParams, MotionState,
};
use crate::shared::FrameContext;

use super::{advance_enemy, EnemyRig, TargetView};

type EnemyQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Transform,
        &'static Body,
        &'static mut MotionState,
        &'static MotionParams,
        &'static GroundProbe,
        &'static ChaseParams,
        &'static MeleeParams,
        &'static mut AttackState,
        Option<&'static CombatTarget>,
        &'static mut BindingStatus,
        Option<&'static mut DebugRays>,
    ),
    (With<Enemy>, Without<Dead>),
>;

/// Система: one enemy tick per FixedUpdate
///
/// Resolves the bound target (missing or dead = skip the whole frame),
/// runs `advance_enemy`, forwards puppet signals and landed punches.
pub fn enemy_frame(
    time: Res<Time<Fixed>>,
    geometry: Res<ArenaGeometry>,
    snapshot: Res<BodySnapshot>,
    mut enemies: EnemyQuery,
    targets: Query<(&Actor, &Transform, &Health), Without<Enemy>>,
    mut damage: EventWriter<DamageRequest>,
    mut anim_events: EventWriter<AnimationSignalEvent>,
) {
    let ctx = FrameContext::new(time.delta_secs(), time.elapsed_secs());
    let space = ArenaSpace::new(&geometry, &snapshot);
    let mut mover = ArenaMover {
        geometry: &geometry,
    };

    for (
        entity,
        mut transform,
        body,
        mut motion,
        motion_params,
        probe,
        chase,
        melee,
        mut attack,
        binding,
        mut status,
        mut debug,
    ) in enemies.iter_mut()
    {
        let target = binding.and_then(CombatTarget::entity).and_then(|target| {
            let (actor, target_transform, health) = targets.get(target).ok()?;
            health.is_alive().then_some(TargetView {
                entity: target,
                tag: actor.tag,
                position: target_transform.translation,
            })
        });

        let mut signals = SignalBuffer::default();
        let mut rig = EnemyRig {
            entity,
            transform: &mut transform,
            body,
            motion: &mut motion,
            motion_params,
            probe,
            chase,
            melee,
            attack: &mut attack,
            debug: debug.as_deref_mut(),
        };

        let Some(frame) = advance_enemy(&ctx, &mut rig, target, &space, &mut mover, &mut signals)
        else {
            if !status.skipping {
                status.skipping = true;
                crate::logger::log_warning(&format!(
                    "⚠️ {:?} has no live target, skipping its frames",
                    entity
                ));
            }
            continue;
        };

        if status.skipping {
            status.skipping = false;
            crate::logger::log_info(&format!("🎯 {:?} bound to its target", entity));
        }

        signals.flush(entity, &mut anim_events);

        if frame.attack_begun {
            crate::logger::log(&format!(
                "👊 {:?} attack begun ({:?} hand)",
                entity, attack.punch_side
            ));
        }

        if frame.attack_resolved && frame.strike.is_none() {
            crate::logger::log(&format!("💨 {:?} punch missed", entity));
        }

        if let Some(strike) = frame.strike {
            crate::logger::log(&format!(
                "🎯 {:?} punch landed on {:?} ({:?} hand, {} damage)",
                entity, strike.target, strike.side, strike.amount
            ));
            damage.write(DamageRequest {
                target: strike.target,
                amount: strike.amount,
                side: Some(strike.side),
                source: Some(entity),
            });
        }
    }
}
