//! Player ECS systems.

use bevy::prelude::*;

use crate::arena::{ArenaGeometry, ArenaMover, ArenaSpace, BodySnapshot, HudText};
use crate::combat::{HitSway, Stamina, StaminaTransition, SwayParams};
use crate::components::{
    Body, Dead, GroundProbe, Health, MotionParams, MotionState, Player, PlayerLook,
};
use crate::shared::FrameContext;

use super::{advance_player, PlayerInput, PlayerRig};

type PlayerQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static mut Transform,
        &'static Body,
        &'static mut MotionState,
        &'static MotionParams,
        &'static GroundProbe,
        &'static mut PlayerLook,
        &'static mut Stamina,
        &'static mut HitSway,
        &'static SwayParams,
        &'static Health,
    ),
    (With<Player>, Without<Dead>),
>;

/// Система: one player tick per FixedUpdate
///
/// Builds the frame context from `Time<Fixed>` + `PlayerInput`, runs
/// `advance_player` against the arena, then consumes the input edges.
pub fn player_frame(
    time: Res<Time<Fixed>>,
    mut input: ResMut<PlayerInput>,
    geometry: Res<ArenaGeometry>,
    snapshot: Res<BodySnapshot>,
    mut hud: ResMut<HudText>,
    mut players: PlayerQuery,
) {
    let ctx = FrameContext::new(time.delta_secs(), time.elapsed_secs()).with_input(input.0);
    let space = ArenaSpace::new(&geometry, &snapshot);
    let mut mover = ArenaMover {
        geometry: &geometry,
    };

    for (
        entity,
        mut transform,
        body,
        mut motion,
        params,
        probe,
        mut look,
        mut stamina,
        mut sway,
        sway_params,
        health,
    ) in players.iter_mut()
    {
        let mut rig = PlayerRig {
            transform: &mut transform,
            body,
            motion: &mut motion,
            params,
            probe,
            look: &mut look,
            stamina: &mut stamina,
            sway: &mut sway,
            sway_params,
            health,
        };

        let frame = advance_player(&ctx, &mut rig, &space, &mut mover, &mut *hud);

        match frame.stamina {
            StaminaTransition::Exhausted => {
                crate::logger::log(&format!("😮‍💨 {:?} out of stamina, sprint locked", entity));
            }
            StaminaTransition::Recovered => {
                crate::logger::log(&format!("💨 {:?} stamina full, sprint available", entity));
            }
            StaminaTransition::None => {}
        }
    }

    input.0.consume_edges();
}
