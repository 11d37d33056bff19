//! First-person player frame.
//!
//! Per tick, in order:
//! 1. cursor lock toggle, look input (pitch clamp, body yaw)
//! 2. hit sway → camera rotation
//! 3. ground probe
//! 4. stamina tick, then sprint gate
//! 5. motion integration + mover
//! 6. HUD strings

use bevy::prelude::*;

use crate::arena::{health_text, stamina_text};
use crate::combat::{compose_view, HitSway, Stamina, StaminaTransition, SwayParams};
use crate::components::{Body, GroundProbe, Health, MotionParams, MotionState, PlayerLook};
use crate::movement::{integrate_motion, probe_ground, MotionIntent};
use crate::shared::{DisplaySink, FrameContext, KinematicMover, SpatialQuery};

/// Mutable view of one player's components for a single tick.
pub struct PlayerRig<'a> {
    pub transform: &'a mut Transform,
    pub body: &'a Body,
    pub motion: &'a mut MotionState,
    pub params: &'a MotionParams,
    pub probe: &'a GroundProbe,
    pub look: &'a mut PlayerLook,
    pub stamina: &'a mut Stamina,
    pub sway: &'a mut HitSway,
    pub sway_params: &'a SwayParams,
    pub health: &'a Health,
}

/// What happened during a player tick (for logging and tests).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerFrame {
    pub grounded: bool,
    /// Sprint speed was granted this tick
    pub sprinting: bool,
    pub stamina: StaminaTransition,
}

/// Apply mouse look: pitch on the camera (clamped), yaw on the body.
fn apply_look(ctx: &FrameContext, rig: &mut PlayerRig) {
    let look = ctx.input.look_delta * rig.look.sensitivity;
    let limit = rig.look.vertical_limit;

    rig.look.pitch = (rig.look.pitch + look.y).clamp(-limit, limit);
    // Positive look.x turns right
    rig.transform.rotate_y(-look.x.to_radians());
}

pub fn advance_player(
    ctx: &FrameContext,
    rig: &mut PlayerRig,
    spatial: &dyn SpatialQuery,
    mover: &mut dyn KinematicMover,
    hud: &mut dyn DisplaySink,
) -> PlayerFrame {
    let input = ctx.input;

    if input.toggle_cursor_lock {
        rig.look.cursor_locked = !rig.look.cursor_locked;
    }

    apply_look(ctx, rig);

    rig.look.camera_rotation = match rig.sway.tick(ctx.dt, rig.sway_params) {
        Some(offset) => compose_view(rig.look.pitch, Some(offset)),
        None => rig.look.base_rotation(),
    };

    let grounded = probe_ground(spatial, rig.probe, rig.transform.translation);

    let stamina = rig.stamina.tick(input.sprint_held, input.has_move(), ctx.dt);
    let sprinting = rig
        .stamina
        .sprint_allowed(input.sprint_held, input.move_axes.length());

    let intent = MotionIntent {
        local_move: input.move_axes,
        sprint: sprinting,
        jump: input.jump_pressed,
    };
    let delta = integrate_motion(
        rig.motion,
        rig.params,
        &intent,
        rig.transform.rotation,
        grounded,
        ctx.dt,
    );
    rig.transform.translation = mover.move_body(rig.transform.translation, delta, rig.body);

    hud.show_health(&health_text(rig.health.current));
    hud.show_stamina(&stamina_text(rig.stamina.display_value()));

    PlayerFrame {
        grounded,
        sprinting,
        stamina,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::{ArenaGeometry, ArenaMover, ArenaSpace, HudText};
    use crate::combat::PunchSide;
    use crate::shared::InputSnapshot;

    #[derive(Default)]
    struct Parts {
        transform: Transform,
        body: Body,
        motion: MotionState,
        params: MotionParams,
        probe: GroundProbe,
        look: PlayerLook,
        stamina: Stamina,
        sway: HitSway,
        sway_params: SwayParams,
        health: Health,
    }

    impl Parts {
        fn rig(&mut self) -> PlayerRig<'_> {
            PlayerRig {
                transform: &mut self.transform,
                body: &self.body,
                motion: &mut self.motion,
                params: &self.params,
                probe: &self.probe,
                look: &mut self.look,
                stamina: &mut self.stamina,
                sway: &mut self.sway,
                sway_params: &self.sway_params,
                health: &self.health,
            }
        }

        /// One tick on a flat empty floor.
        fn step(&mut self, ctx: &FrameContext, hud: &mut HudText) -> PlayerFrame {
            let geometry = ArenaGeometry::default();
            let space = ArenaSpace {
                geometry: &geometry,
                bodies: &[],
            };
            let mut mover = ArenaMover {
                geometry: &geometry,
            };
            advance_player(ctx, &mut self.rig(), &space, &mut mover, hud)
        }
    }

    fn ctx(input: InputSnapshot) -> FrameContext {
        FrameContext::new(0.25, 0.0).with_input(input)
    }

    #[test]
    fn test_walk_forward_moves_and_updates_hud() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();

        let frame = parts.step(&ctx(InputSnapshot::moving(Vec2::Y)), &mut hud);

        assert!(frame.grounded);
        assert!(!frame.sprinting);
        assert!(parts.transform.translation.z < 0.0);
        assert_eq!(parts.transform.translation.y, 0.0);
        assert_eq!(hud.health, "HP: 100");
        assert_eq!(hud.stamina, "Stamina: 100");
    }

    #[test]
    fn test_sprint_five_seconds_exhausts_on_last_tick() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();
        let sprint = InputSnapshot {
            sprint_held: true,
            ..InputSnapshot::moving(Vec2::Y)
        };

        let mut step = ctx(sprint);
        for _ in 0..19 {
            let frame = parts.step(&step, &mut hud);
            assert_eq!(frame.stamina, StaminaTransition::None);
            assert!(frame.sprinting);
            step = step.advanced();
        }
        assert!(parts.stamina.can_sprint());
        assert_eq!(parts.stamina.current, 5.0);

        // t = 5 s
        let frame = parts.step(&step, &mut hud);
        assert_eq!(frame.stamina, StaminaTransition::Exhausted);
        assert!(!frame.sprinting);
        assert_eq!(parts.stamina.current, 0.0);
        assert_eq!(hud.stamina, "Stamina: 0");
    }

    #[test]
    fn test_exhausted_sprint_stays_locked_until_full() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();
        let sprint = InputSnapshot {
            sprint_held: true,
            ..InputSnapshot::moving(Vec2::Y)
        };
        for _ in 0..20 {
            parts.step(&ctx(sprint), &mut hud);
        }
        assert!(parts.stamina.is_exhausted());

        // Keep holding sprint: the delay runs out on the 4th tick, which already
        // regenerates; the 40th regen tick refills to max and grants sprint again
        for tick in 0..42 {
            let frame = parts.step(&ctx(sprint), &mut hud);
            assert!(!frame.sprinting, "sprint re-enabled early at tick {}", tick);
            assert!(parts.stamina.current <= parts.stamina.max);
        }

        let frame = parts.step(&ctx(sprint), &mut hud);
        assert_eq!(frame.stamina, StaminaTransition::Recovered);
        assert!(frame.sprinting);
    }

    #[test]
    fn test_look_turns_body_and_clamps_pitch() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();
        let look = InputSnapshot {
            look_delta: Vec2::new(45.0, 100.0),
            ..default()
        };

        parts.step(&ctx(look), &mut hud);

        assert_eq!(parts.look.pitch, 80.0);
        let forward = parts.transform.rotation * Vec3::NEG_Z;
        // 90° right: forward is +X
        assert!((forward - Vec3::X).length() < 1e-4);
        assert_eq!(parts.look.camera_rotation, parts.look.base_rotation());
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();
        let jump = InputSnapshot {
            jump_pressed: true,
            ..default()
        };

        parts.step(&ctx(jump), &mut hud);
        let apex_speed = parts.params.jump_velocity();
        assert!((parts.motion.vertical_velocity - apex_speed).abs() < 1e-4);
        assert!(parts.transform.translation.y > 0.0);

        // Airborne now: a second press does nothing, gravity applies
        parts.transform.translation.y = 2.0;
        parts.step(&ctx(jump), &mut hud);
        assert!(parts.motion.vertical_velocity < apex_speed);
    }

    #[test]
    fn test_sway_composes_then_reverts() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();
        parts.sway.receive_hit(PunchSide::Right, &SwayParams::default());

        parts.step(&ctx(InputSnapshot::default()), &mut hud);
        assert_ne!(parts.look.camera_rotation, parts.look.base_rotation());
        // Right-hand punch sways the view left
        assert!((parts.look.camera_rotation * Vec3::NEG_Z).x < 0.0);

        // 0.5 s total > 0.4 s duration
        parts.step(&ctx(InputSnapshot::default()), &mut hud);
        assert_eq!(parts.look.camera_rotation, parts.look.base_rotation());
        assert!(!parts.sway.is_active());
    }

    #[test]
    fn test_cursor_lock_toggle() {
        let mut parts = Parts::default();
        let mut hud = HudText::default();
        let toggle = InputSnapshot {
            toggle_cursor_lock: true,
            ..default()
        };

        assert!(parts.look.cursor_locked);
        parts.step(&ctx(toggle), &mut hud);
        assert!(!parts.look.cursor_locked);
    }
}
