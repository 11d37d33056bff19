//! Player components: marker, look/camera state

use bevy::prelude::*;

/// Marker: player-controlled actor
#[derive(Component, Debug, Default)]
pub struct Player;

/// First-person look state.
///
/// Body yaw lives in the actor Transform; the camera only carries pitch and
/// the hit-sway offset, composed into `camera_rotation` every frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerLook {
    /// Degrees per unit of look input
    pub sensitivity: f32,
    /// Pitch clamp (degrees, symmetric)
    pub vertical_limit: f32,
    /// Camera pitch (degrees, up positive)
    pub pitch: f32,
    /// Camera local rotation after sway composition
    pub camera_rotation: Quat,
    pub cursor_locked: bool,
}

impl Default for PlayerLook {
    fn default() -> Self {
        Self {
            sensitivity: 2.0,
            vertical_limit: 80.0,
            pitch: 0.0,
            camera_rotation: Quat::IDENTITY,
            cursor_locked: true,
        }
    }
}

impl PlayerLook {
    /// Camera rotation without any sway.
    pub fn base_rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch.to_radians())
    }
}
