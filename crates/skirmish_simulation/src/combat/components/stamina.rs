//! Stamina resource gating sprint.
//!
//! # Model
//! - Sprinting while moving drains `drain_rate`/s and re-arms the regen delay
//! - Otherwise the regen delay counts down, then stamina refills `regen_rate`/s
//! - Hitting 0 latches `can_sprint = false`; only a full refill to `max`
//!   releases it (hysteresis, no partial re-enable)

use bevy::prelude::*;

/// Sprint stamina (player only)
///
/// Invariant: 0.0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Stamina {
    pub current: f32,
    pub max: f32,
    /// units/sec while sprinting
    pub drain_rate: f32,
    /// units/sec once the delay has elapsed
    pub regen_rate: f32,
    /// seconds of not sprinting before regen starts
    pub regen_delay: f32,
    /// Remaining regen delay
    pub regen_timer: f32,
    /// Minimum move input magnitude that counts as a sprint
    pub min_sprint_input: f32,
    can_sprint: bool,
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Latch transitions reported by `Stamina::tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaTransition {
    None,
    /// Drained to 0 this tick, sprint locked out
    Exhausted,
    /// Refilled to max this tick, sprint available again
    Recovered,
}

impl Stamina {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            drain_rate: 20.0,
            regen_rate: 10.0,
            regen_delay: 1.0,
            regen_timer: 0.0,
            min_sprint_input: 0.5,
            can_sprint: true,
        }
    }

    pub fn with_rates(mut self, drain_rate: f32, regen_rate: f32, regen_delay: f32) -> Self {
        self.drain_rate = drain_rate;
        self.regen_rate = regen_rate;
        self.regen_delay = regen_delay;
        self
    }

    pub fn can_sprint(&self) -> bool {
        self.can_sprint
    }

    pub fn is_exhausted(&self) -> bool {
        !self.can_sprint
    }

    /// Whether a sprint request is honored for movement speed this tick.
    pub fn sprint_allowed(&self, sprint_requested: bool, move_magnitude: f32) -> bool {
        sprint_requested
            && self.can_sprint
            && self.current > 0.0
            && move_magnitude > self.min_sprint_input
    }

    /// Advance one tick.
    ///
    /// `moving` is "any movement input this tick", independent of the
    /// magnitude threshold used for speed.
    pub fn tick(&mut self, sprint_requested: bool, moving: bool, dt: f32) -> StaminaTransition {
        let sprinting = self.can_sprint && sprint_requested && moving;

        if sprinting {
            self.current -= self.drain_rate * dt;
            self.regen_timer = self.regen_delay;

            if self.current <= 0.0 {
                self.current = 0.0;
                self.can_sprint = false;
                return StaminaTransition::Exhausted;
            }
            return StaminaTransition::None;
        }

        self.regen_timer = (self.regen_timer - dt).max(0.0);
        if self.regen_timer > 0.0 {
            return StaminaTransition::None;
        }

        self.current += self.regen_rate * dt;
        if self.current >= self.max {
            self.current = self.max;
            if !self.can_sprint {
                self.can_sprint = true;
                return StaminaTransition::Recovered;
            }
        }

        StaminaTransition::None
    }

    /// HUD form: rounded to the nearest integer.
    pub fn display_value(&self) -> i32 {
        self.current.round() as i32
    }
}
