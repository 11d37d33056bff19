//! Camera sway after taking a hit.
//!
//! A hit sets a yaw peak (direction from the punch side) and a vertical kick,
//! both decaying to neutral over `duration` through an ease-in-out curve.
//! In the second half the vertical term instead dips to -kick/2 (recoil back).

use bevy::prelude::*;

use crate::combat::PunchSide;

/// Sway tuning.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct SwayParams {
    /// Peak yaw (degrees)
    pub magnitude: f32,
    /// Seconds from hit to neutral
    pub duration: f32,
    /// Peak vertical kick (degrees)
    pub vertical_kick: f32,
}

impl Default for SwayParams {
    fn default() -> Self {
        Self {
            magnitude: 18.0,
            duration: 0.4,
            vertical_kick: 8.0,
        }
    }
}

/// View offset produced by an active sway.
///
/// `yaw` positive = view turned right, `vertical` positive = view tilted up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwayOffset {
    pub yaw: f32,
    pub vertical: f32,
}

/// Active hit reaction (player only).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HitSway {
    /// Seconds left (0 = inactive)
    pub timer: f32,
    pub peak_yaw: f32,
    pub peak_vertical: f32,
    pub side: Option<PunchSide>,
}

/// Linear interpolation with `t` clamped to [0, 1].
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Smoothstep ease-in-out on [0, 1] (zero slope at both ends).
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

impl HitSway {
    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Restart the sway for a punch from `side`.
    ///
    /// A right-hand punch sways the view left, a left-hand punch sways it right.
    pub fn receive_hit(&mut self, side: PunchSide, params: &SwayParams) {
        self.timer = params.duration;
        self.peak_yaw = match side {
            PunchSide::Right => -params.magnitude,
            PunchSide::Left => params.magnitude,
        };
        self.peak_vertical = params.vertical_kick;
        self.side = Some(side);
    }

    /// Offset at `progress` ∈ [0, 1] of the sway.
    pub fn sample(&self, progress: f32) -> SwayOffset {
        let progress = progress.clamp(0.0, 1.0);
        let curve = ease_in_out(progress);

        let yaw = lerp(self.peak_yaw, 0.0, curve);
        let vertical = if progress > 0.5 {
            lerp(0.0, -self.peak_vertical * 0.5, (progress - 0.5) * 2.0)
        } else {
            lerp(self.peak_vertical, 0.0, curve)
        };

        SwayOffset { yaw, vertical }
    }

    /// Count down one tick. Returns the offset to apply, or None once neutral.
    pub fn tick(&mut self, dt: f32, params: &SwayParams) -> Option<SwayOffset> {
        if !self.is_active() {
            return None;
        }

        self.timer -= dt;
        if self.timer <= 0.0 {
            *self = HitSway::default();
            return None;
        }

        let progress = if params.duration > 0.0 {
            1.0 - self.timer / params.duration
        } else {
            1.0
        };
        Some(self.sample(progress))
    }
}

/// Camera local rotation: base pitch plus an optional sway offset, no roll.
pub fn compose_view(pitch: f32, sway: Option<SwayOffset>) -> Quat {
    let offset = sway.unwrap_or_default();
    Quat::from_euler(
        EulerRot::YXZ,
        -offset.yaw.to_radians(),
        (pitch + offset.vertical).to_radians(),
        0.0,
    )
}
