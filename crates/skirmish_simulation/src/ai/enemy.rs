//! Melee enemy frame: chase the bound target, punch when in reach.
//!
//! Per tick, in order:
//! 1. turn toward the target (rate-limited), chase until stopping distance
//! 2. ground probe, motion integration, mover
//! 3. "Speed" = horizontal speed / chase speed
//! 4. in range + in cone → try to begin an attack
//! 5. tick the attack delay; a resolved cone cast that lands becomes a `Strike`

use bevy::prelude::*;

use crate::combat::{
    log_cone_cast, target_in_reach, AttackPose, AttackState, AttackTick, DebugRays, MeleeParams,
    PunchSide,
};
use crate::components::{ActorTag, Body, ChaseParams, GroundProbe, MotionParams, MotionState};
use crate::movement::{integrate_motion, probe_ground, MotionIntent};
use crate::shared::{AnimSignal, AnimationDriver, FrameContext, KinematicMover, SpatialQuery};

use super::{chase_axes, chase_motion, turn_toward};

/// What the enemy knows about its bound target this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub entity: Entity,
    pub tag: ActorTag,
    /// Base position
    pub position: Vec3,
}

/// Mutable view of one enemy's components for a single tick.
pub struct EnemyRig<'a> {
    pub entity: Entity,
    pub transform: &'a mut Transform,
    pub body: &'a Body,
    pub motion: &'a mut MotionState,
    pub motion_params: &'a MotionParams,
    pub probe: &'a GroundProbe,
    pub chase: &'a ChaseParams,
    pub melee: &'a MeleeParams,
    pub attack: &'a mut AttackState,
    pub debug: Option<&'a mut DebugRays>,
}

/// A punch that landed and must be applied to the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub target: Entity,
    pub amount: i32,
    pub side: PunchSide,
}

/// Result of an active enemy tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyFrame {
    pub attack_begun: bool,
    /// A cone cast ran this tick
    pub attack_resolved: bool,
    pub strike: Option<Strike>,
}

/// Advance one enemy by one tick.
///
/// Returns None (and touches nothing) when there is no live target bound.
pub fn advance_enemy(
    ctx: &FrameContext,
    rig: &mut EnemyRig,
    target: Option<TargetView>,
    spatial: &dyn SpatialQuery,
    mover: &mut dyn KinematicMover,
    anim: &mut dyn AnimationDriver,
) -> Option<EnemyFrame> {
    let target = target?;
    let mut frame = EnemyFrame::default();

    // Navigation
    let to_target = target.position - rig.transform.translation;
    let max_turn = rig.chase.angular_speed.to_radians() * ctx.dt;
    rig.transform.rotation = turn_toward(rig.transform.rotation, to_target, max_turn);

    let intent = MotionIntent::walk(chase_axes(rig.transform.rotation, to_target, rig.chase));
    let params = chase_motion(rig.motion_params, rig.chase);
    let grounded = probe_ground(spatial, rig.probe, rig.transform.translation);
    let delta = integrate_motion(
        rig.motion,
        &params,
        &intent,
        rig.transform.rotation,
        grounded,
        ctx.dt,
    );
    rig.transform.translation = mover.move_body(rig.transform.translation, delta, rig.body);

    let speed = if rig.chase.chase_speed > 0.0 {
        rig.motion.horizontal_speed() / rig.chase.chase_speed
    } else {
        0.0
    };
    anim.signal(AnimSignal::Speed(speed));

    // Attack
    let pose = AttackPose {
        position: rig.transform.translation,
        forward: rig.transform.rotation * Vec3::NEG_Z,
    };

    if target_in_reach(pose.position, pose.forward, target.position, rig.melee) {
        frame.attack_begun = rig.attack.try_begin(ctx.now, rig.melee, anim);
    }

    if let AttackTick::Resolved { report, landed } =
        rig.attack.tick(ctx, rig.melee, pose, spatial, target.tag)
    {
        frame.attack_resolved = true;
        frame.strike = landed.map(|side| Strike {
            target: target.entity,
            amount: rig.melee.damage,
            side,
        });

        if let Some(debug) = rig.debug.as_deref_mut() {
            if debug.enabled {
                log_cone_cast(rig.entity, &report);
                debug.last = Some(report);
            }
        }
    }

    Some(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{ArenaGeometry, ArenaMover, ArenaSpace, BodyEntry};
    use crate::shared::AnimTrigger;

    #[derive(Default)]
    struct Recorder(Vec<AnimSignal>);

    impl AnimationDriver for Recorder {
        fn signal(&mut self, signal: AnimSignal) {
            self.0.push(signal);
        }
    }

    struct Parts {
        transform: Transform,
        body: Body,
        motion: MotionState,
        motion_params: MotionParams,
        probe: GroundProbe,
        chase: ChaseParams,
        melee: MeleeParams,
        attack: AttackState,
        debug: DebugRays,
    }

    impl Default for Parts {
        fn default() -> Self {
            Self {
                transform: Transform::default(),
                body: Body::default(),
                motion: MotionState::default(),
                motion_params: MotionParams::default(),
                probe: GroundProbe::default(),
                chase: ChaseParams::default(),
                melee: MeleeParams::default(),
                attack: AttackState::default(),
                debug: DebugRays::enabled(),
            }
        }
    }

    const ENEMY: Entity = Entity::PLACEHOLDER;

    fn player_at(position: Vec3) -> (TargetView, BodyEntry) {
        let entity = Entity::from_raw(1);
        (
            TargetView {
                entity,
                tag: ActorTag::Player,
                position,
            },
            BodyEntry {
                entity,
                tag: ActorTag::Player,
                position,
                body: Body::default(),
            },
        )
    }

    impl Parts {
        fn step(
            &mut self,
            ctx: &FrameContext,
            target: Option<(TargetView, BodyEntry)>,
            anim: &mut Recorder,
        ) -> Option<EnemyFrame> {
            let geometry = ArenaGeometry::default();
            let mut bodies = vec![BodyEntry {
                entity: ENEMY,
                tag: ActorTag::Enemy,
                position: self.transform.translation,
                body: self.body,
            }];
            bodies.extend(target.map(|(_, body)| body));
            let space = ArenaSpace {
                geometry: &geometry,
                bodies: &bodies,
            };
            let mut mover = ArenaMover {
                geometry: &geometry,
            };
            let mut rig = EnemyRig {
                entity: ENEMY,
                transform: &mut self.transform,
                body: &self.body,
                motion: &mut self.motion,
                motion_params: &self.motion_params,
                probe: &self.probe,
                chase: &self.chase,
                melee: &self.melee,
                attack: &mut self.attack,
                debug: Some(&mut self.debug),
            };
            advance_enemy(ctx, &mut rig, target.map(|(view, _)| view), &space, &mut mover, anim)
        }
    }

    #[test]
    fn test_missing_target_skips_frame() {
        let mut parts = Parts::default();
        parts.motion.horizontal_velocity = Vec3::X;
        let mut anim = Recorder::default();

        let frame = parts.step(&FrameContext::new(0.25, 0.0), None, &mut anim);

        assert!(frame.is_none());
        assert_eq!(parts.transform.translation, Vec3::ZERO);
        assert_eq!(parts.motion.horizontal_velocity, Vec3::X);
        assert!(anim.0.is_empty());
    }

    #[test]
    fn test_far_target_is_chased() {
        let mut parts = Parts::default();
        let mut anim = Recorder::default();
        let target = player_at(Vec3::new(0.0, 0.0, -8.0));
        let mut ctx = FrameContext::new(0.1, 0.0);

        for _ in 0..10 {
            let frame = parts.step(&ctx, Some(target), &mut anim);
            assert_eq!(frame.map(|f| f.attack_begun), Some(false));
            ctx = ctx.advanced();
        }

        assert!(parts.transform.translation.z < -1.0);
        assert!(parts.attack.last_hit_time.is_none());
        let Some(AnimSignal::Speed(speed)) = anim.0.last().copied() else {
            panic!("no speed signal");
        };
        assert!(speed > 0.5 && speed <= 1.0);
    }

    #[test]
    fn test_turn_toward_target_is_rate_limited() {
        let mut parts = Parts::default();
        let mut anim = Recorder::default();
        let target = player_at(Vec3::new(8.0, 0.0, 0.0));

        parts.step(&FrameContext::new(0.1, 0.0), Some(target), &mut anim);

        let forward = parts.transform.rotation * Vec3::NEG_Z;
        assert!(forward.x > 0.0);
        assert!((forward.angle_between(Vec3::NEG_Z).to_degrees() - 36.0).abs() < 1e-2);
    }

    #[test]
    fn test_target_in_reach_is_punched_after_delay() {
        let mut parts = Parts::default();
        let mut anim = Recorder::default();
        let target = player_at(Vec3::new(0.0, 0.0, -2.0));
        let ctx = FrameContext::new(0.25, 0.0);

        let first = parts.step(&ctx, Some(target), &mut anim).unwrap_or_default();
        assert!(first.attack_begun);
        assert!(first.strike.is_none());
        assert!(anim.0.contains(&AnimSignal::Trigger(AnimTrigger::Attack)));
        assert!(anim.0.contains(&AnimSignal::PunchSide(PunchSide::Left)));

        let second = parts.step(&ctx.advanced(), Some(target), &mut anim).unwrap_or_default();
        assert!(second.attack_resolved);
        assert_eq!(
            second.strike,
            Some(Strike {
                target: target.0.entity,
                amount: 10,
                side: PunchSide::Left,
            })
        );
        assert_eq!(parts.attack.last_hit_time, Some(0.25));
        assert_eq!(parts.attack.punch_side, PunchSide::Right);

        // Within stopping distance: no approach
        assert!(parts.transform.translation.z.abs() < 1e-5);
        let report = parts.debug.last.as_ref().map(|r| r.landed());
        assert_eq!(report, Some(true));
    }

    #[test]
    fn test_cooldown_gates_next_attack() {
        let mut parts = Parts::default();
        let mut anim = Recorder::default();
        let target = player_at(Vec3::new(0.0, 0.0, -2.0));
        let mut ctx = FrameContext::new(0.25, 0.0);

        let mut strikes = 0;
        // 2 s: hit at 0.25, cooldown until 1.75, second attack begins at 1.75
        for _ in 0..8 {
            if let Some(EnemyFrame {
                strike: Some(_), ..
            }) = parts.step(&ctx, Some(target), &mut anim)
            {
                strikes += 1;
            }
            ctx = ctx.advanced();
        }

        assert_eq!(strikes, 1);
        assert!(parts.attack.is_delaying());
    }

    #[test]
    fn test_target_behind_is_not_attacked_before_turning() {
        let mut parts = Parts::default();
        let mut anim = Recorder::default();
        let target = player_at(Vec3::new(0.0, 0.0, 2.0));

        // 0.1 s at 360°/s turns only 36° of the needed 180°
        let frame = parts.step(&FrameContext::new(0.1, 0.0), Some(target), &mut anim);

        assert_eq!(frame.map(|f| f.attack_begun), Some(false));
    }
}
