//! Per-frame context passed explicitly into every update.

use bevy::prelude::*;

/// One sample of player intent.
///
/// `move_axes.x` is strafe (right positive), `move_axes.y` is forward.
/// `look_delta` is in raw mouse units (scaled by sensitivity downstream),
/// `x` positive = turn right, `y` positive = look up.
///
/// `jump_pressed` and `toggle_cursor_lock` are edge samples: true only on the
/// frame the button went down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct InputSnapshot {
    pub move_axes: Vec2,
    pub sprint_held: bool,
    pub jump_pressed: bool,
    pub look_delta: Vec2,
    pub toggle_cursor_lock: bool,
}

impl InputSnapshot {
    /// Forward/strafe axes with nothing else pressed.
    pub fn moving(move_axes: Vec2) -> Self {
        Self {
            move_axes,
            ..default()
        }
    }

    /// True if any movement axis is non-zero.
    pub fn has_move(&self) -> bool {
        self.move_axes.x != 0.0 || self.move_axes.y != 0.0
    }

    /// Clear the edge-triggered parts after they were consumed.
    pub fn consume_edges(&mut self) {
        self.jump_pressed = false;
        self.toggle_cursor_lock = false;
        self.look_delta = Vec2::ZERO;
    }
}

/// Immutable facts for one simulation step.
///
/// Built once per tick by the systems from `Time<Fixed>` and the input
/// resource; the core never reads the clock or input on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Step length (seconds)
    pub dt: f32,
    /// Simulation clock at this step (seconds since start)
    pub now: f32,
    pub input: InputSnapshot,
}

impl FrameContext {
    pub fn new(dt: f32, now: f32) -> Self {
        Self {
            dt,
            now,
            input: InputSnapshot::default(),
        }
    }

    pub fn with_input(mut self, input: InputSnapshot) -> Self {
        self.input = input;
        self
    }

    /// Context for the step after this one (same input).
    pub fn advanced(&self) -> Self {
        Self {
            now: self.now + self.dt,
            ..*self
        }
    }
}
