//! Player intent sources.
//!
//! `PlayerInput` is the only thing the player system reads. A host writes it
//! every frame (engine input bridge); headless runs let `ScriptedInput`
//! generate it from the seeded RNG.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::InputSnapshot;
use crate::DeterministicRng;

/// Input sample consumed by the next player tick.
///
/// Edge fields are cleared once the tick has consumed them.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput(pub InputSnapshot);

/// Reproducible random player: holds a movement intent for `hold_seconds`,
/// then rolls a new one. Jumps and look nudges are rolled per tick.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScriptedInput {
    pub hold_seconds: f32,
    /// Chance per tick of a jump press
    pub jump_chance: f64,
    /// Chance that a held intent includes sprint
    pub sprint_chance: f64,
    /// Max |look_delta.x| per tick (input units)
    pub max_turn: f32,
    held: InputSnapshot,
    remaining: f32,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            hold_seconds: 0.75,
            jump_chance: 0.01,
            sprint_chance: 0.3,
            max_turn: 1.5,
            held: InputSnapshot::default(),
            remaining: 0.0,
        }
    }
}

/// Movement axes a scripted player picks from (forward-heavy).
const SCRIPTED_MOVES: [Vec2; 7] = [
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.7, 0.7),
    Vec2::ZERO,
];

impl ScriptedInput {
    pub fn new(hold_seconds: f32, jump_chance: f64, sprint_chance: f64, max_turn: f32) -> Self {
        Self {
            hold_seconds,
            jump_chance,
            sprint_chance,
            max_turn,
            ..default()
        }
    }

    /// Input sample for a tick of length `dt`.
    pub fn next_sample<R: Rng>(&mut self, dt: f32, rng: &mut R) -> InputSnapshot {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = self.hold_seconds;
            let move_axes = SCRIPTED_MOVES[rng.gen_range(0..SCRIPTED_MOVES.len())];
            self.held = InputSnapshot {
                move_axes,
                sprint_held: rng.gen_bool(self.sprint_chance),
                ..default()
            };
        }

        let turn = if self.max_turn > 0.0 {
            rng.gen_range(-self.max_turn..=self.max_turn)
        } else {
            0.0
        };

        InputSnapshot {
            jump_pressed: rng.gen_bool(self.jump_chance),
            look_delta: Vec2::new(turn, 0.0),
            ..self.held
        }
    }
}

/// System: feed `PlayerInput` from the script (headless runs only).
pub fn drive_scripted_input(
    time: Res<Time<Fixed>>,
    mut rng: ResMut<DeterministicRng>,
    mut script: ResMut<ScriptedInput>,
    mut input: ResMut<PlayerInput>,
) {
    input.0 = script.next_sample(time.delta_secs(), &mut rng.rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(seed: u64) -> Vec<InputSnapshot> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut script = ScriptedInput::default();
        (0..120).map(|_| script.next_sample(1.0 / 60.0, &mut rng)).collect()
    }

    #[test]
    fn test_same_seed_same_script() {
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn test_intent_is_held_between_rolls() {
        let samples = run(3);
        // 0.75 s at 60 Hz = 45 ticks share one intent
        for sample in &samples[1..45] {
            assert_eq!(sample.move_axes, samples[0].move_axes);
            assert_eq!(sample.sprint_held, samples[0].sprint_held);
        }
    }
}
