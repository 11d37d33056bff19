//! Melee attack components.
//!
//! State tracking for the delayed cone-cast punch:
//!
//! ```text
//! Idle ──(target in range + in cone + off cooldown)──► Delaying
//!   ▲                                                     │
//!   └──────────(delay elapsed → cone cast, any outcome)───┘
//! ```
//!
//! Cooldown is an overlay on Idle, measured from the last punch that
//! actually landed. Misses neither refresh the cooldown nor swap hands.

use bevy::prelude::*;

use crate::combat::melee::{cone_cast, ConeCastReport};
use crate::components::ActorTag;
use crate::shared::{AnimSignal, AnimTrigger, AnimationDriver, FrameContext, SpatialQuery};

// ============================================================================
// Punch side
// ============================================================================

/// Which hand throws the punch.
///
/// Alternates after every landed hit. Drives animation selection on the
/// attacker and the sway direction on the victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum PunchSide {
    #[default]
    Left,
    Right,
}

impl PunchSide {
    /// Animator index (0 = left, 1 = right).
    pub fn index(&self) -> i32 {
        match self {
            PunchSide::Left => 0,
            PunchSide::Right => 1,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            PunchSide::Left => PunchSide::Right,
            PunchSide::Right => PunchSide::Left,
        }
    }
}

// ============================================================================
// Melee tuning
// ============================================================================

/// Melee attack tuning.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MeleeParams {
    /// Max distance to start an attack and length of every cone ray (m)
    pub range: f32,
    /// Half-angle of the cone (degrees); total cone = 2 × this
    pub cone_half_angle: f32,
    pub damage: i32,
    /// Minimum time between landed hits (seconds)
    pub cooldown: f32,
    /// Time between the attack trigger and the cone cast (animation sync)
    pub attack_delay: f32,
    /// Ray origin height above the actor base (m)
    pub ray_height: f32,
}

impl Default for MeleeParams {
    fn default() -> Self {
        Self {
            range: 3.0,
            cone_half_angle: 45.0,
            damage: 10,
            cooldown: 1.5,
            attack_delay: 0.4,
            ray_height: 1.2,
        }
    }
}

// ============================================================================
// Attack state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub enum AttackPhase {
    Idle,
    /// Animation playing, cone cast fires when `remaining` reaches 0
    Delaying { remaining: f32 },
}

/// Where the attacker stands when the cone cast fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackPose {
    /// Actor base position
    pub position: Vec3,
    /// Actor facing (need not be normalized)
    pub forward: Vec3,
}

/// Outcome of one `AttackState::tick`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttackTick {
    /// Not attacking
    Idle,
    /// Delay still running
    Waiting,
    /// Delay elapsed, the cone cast ran
    Resolved {
        report: ConeCastReport,
        /// Side of the punch that landed (None = miss)
        landed: Option<PunchSide>,
    },
}

/// Per-enemy melee state machine.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AttackState {
    pub phase: AttackPhase,
    /// Clock of the last landed hit (None = never hit, no cooldown)
    pub last_hit_time: Option<f32>,
    /// Hand for the next punch
    pub punch_side: PunchSide,
}

impl Default for AttackState {
    fn default() -> Self {
        Self {
            phase: AttackPhase::Idle,
            last_hit_time: None,
            punch_side: PunchSide::Left,
        }
    }
}

impl AttackState {
    pub fn is_delaying(&self) -> bool {
        matches!(self.phase, AttackPhase::Delaying { .. })
    }

    /// Seconds until the cooldown allows a new attack (0 = ready).
    pub fn cooldown_remaining(&self, now: f32, params: &MeleeParams) -> f32 {
        match self.last_hit_time {
            Some(last) => (last + params.cooldown - now).max(0.0),
            None => 0.0,
        }
    }

    pub fn off_cooldown(&self, now: f32, params: &MeleeParams) -> bool {
        match self.last_hit_time {
            Some(last) => now >= last + params.cooldown,
            None => true,
        }
    }

    /// Idle → Delaying.
    ///
    /// No-op (returns false) while already delaying or on cooldown.
    /// The caller has already checked range and cone.
    pub fn try_begin(
        &mut self,
        now: f32,
        params: &MeleeParams,
        anim: &mut dyn AnimationDriver,
    ) -> bool {
        if !self.off_cooldown(now, params) || self.is_delaying() {
            return false;
        }

        anim.signal(AnimSignal::PunchSide(self.punch_side));
        anim.signal(AnimSignal::Trigger(AnimTrigger::Attack));

        self.phase = AttackPhase::Delaying {
            remaining: params.attack_delay,
        };
        true
    }

    /// Count the delay down; when it elapses run the cone cast and return to Idle.
    ///
    /// A landed hit records `last_hit_time = ctx.now` and swaps hands.
    pub fn tick(
        &mut self,
        ctx: &FrameContext,
        params: &MeleeParams,
        pose: AttackPose,
        spatial: &dyn SpatialQuery,
        target_tag: ActorTag,
    ) -> AttackTick {
        let AttackPhase::Delaying { remaining } = self.phase else {
            return AttackTick::Idle;
        };

        let remaining = remaining - ctx.dt;
        if remaining > 0.0 {
            self.phase = AttackPhase::Delaying { remaining };
            return AttackTick::Waiting;
        }

        self.phase = AttackPhase::Idle;

        let origin = pose.position + Vec3::Y * params.ray_height;
        let report = cone_cast(
            spatial,
            origin,
            pose.forward,
            params.cone_half_angle,
            params.range,
            target_tag,
        );

        let landed = if report.hit_index.is_some() {
            let side = self.punch_side;
            self.last_hit_time = Some(ctx.now);
            self.punch_side = side.flipped();
            Some(side)
        } else {
            None
        };

        AttackTick::Resolved { report, landed }
    }
}

/// Last cone cast of an attacker, kept for debug visualization.
#[derive(Component, Debug, Clone, Default)]
pub struct DebugRays {
    pub enabled: bool,
    pub last: Option<ConeCastReport>,
}

impl DebugRays {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            last: None,
        }
    }
}
