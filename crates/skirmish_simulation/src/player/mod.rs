//! Player domain: first-person controller
//!
//! - controller: `advance_player` (look, sway, ground, stamina, motion, HUD)
//! - input: `PlayerInput` resource, seeded `ScriptedInput`
//! - systems: ECS glue

use bevy::prelude::*;

pub mod controller;
pub mod input;
pub mod systems;

pub use controller::*;
pub use input::*;
pub use systems::*;

use crate::SimulationSet;

/// Player Plugin
///
/// `drive_scripted_input` runs only when a `ScriptedInput` resource exists;
/// otherwise the host writes `PlayerInput` itself.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>();

        app.add_systems(
            FixedUpdate,
            (
                drive_scripted_input
                    .run_if(resource_exists::<ScriptedInput>)
                    .in_set(SimulationSet::Sense),
                player_frame.in_set(SimulationSet::Player),
            ),
        );
    }
}
