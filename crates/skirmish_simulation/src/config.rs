//! Simulation configuration.
//!
//! One RON file describes the duel: seed, tick rate, arena layout and the
//! tuning of both actors. Every field has a default, so partial files work:
//!
//! ```ron
//! (
//!     seed: 7,
//!     enemy: (damage: 25, debug_rays: true),
//! )
//! ```

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arena::{ArenaGeometry, Obstacle};
use crate::combat::{MeleeParams, Stamina, SwayParams};
use crate::components::{Body, ChaseParams, DeathGrace, GroundProbe, MotionParams, PlayerLook};
use crate::player::ScriptedInput;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not valid RON for `SimulationConfig`
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Parsed, but a value is out of its domain
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Full simulation setup.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    /// FixedUpdate rate
    pub tick_hz: f64,
    /// Ticks the headless binary runs
    pub ticks: u32,
    pub arena: ArenaConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub script: ScriptConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: 60.0,
            ticks: 1200,
            arena: ArenaConfig::default(),
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            script: ScriptConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub center: [f32; 3],
    pub half_extents: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub ground_height: f32,
    pub obstacles: Vec<ObstacleConfig>,
    pub player_spawn: [f32; 3],
    pub enemy_spawn: [f32; 3],
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.5, 0.0],
            half_extents: [0.5, 0.5, 0.5],
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            obstacles: Vec::new(),
            player_spawn: [0.0, 0.0, 0.0],
            enemy_spawn: [0.0, 0.0, -8.0],
        }
    }
}

impl ArenaConfig {
    pub fn geometry(&self) -> ArenaGeometry {
        ArenaGeometry {
            ground_height: self.ground_height,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| Obstacle::new(Vec3::from_array(o.center), Vec3::from_array(o.half_extents)))
                .collect(),
        }
    }
}

/// Player tuning (first-person controller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub acceleration: f32,
    pub gravity: f32,
    pub jump_height: f32,
    pub mouse_sensitivity: f32,
    /// Degrees
    pub vertical_look_limit: f32,
    pub max_health: i32,
    pub ground_check_distance: f32,
    pub body_height: f32,
    pub body_radius: f32,
    pub stamina_max: f32,
    pub stamina_drain: f32,
    pub stamina_regen: f32,
    pub stamina_regen_delay: f32,
    /// Move input magnitude needed for sprint speed
    pub min_sprint_input: f32,
    /// Degrees
    pub sway_magnitude: f32,
    pub sway_duration: f32,
    /// Degrees
    pub sway_vertical_kick: f32,
    pub death_grace: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            acceleration: 20.0,
            gravity: -9.81,
            jump_height: 1.5,
            mouse_sensitivity: 2.0,
            vertical_look_limit: 80.0,
            max_health: 100,
            ground_check_distance: 0.4,
            body_height: 2.0,
            body_radius: 0.5,
            stamina_max: 100.0,
            stamina_drain: 20.0,
            stamina_regen: 10.0,
            stamina_regen_delay: 1.0,
            min_sprint_input: 0.5,
            sway_magnitude: 18.0,
            sway_duration: 0.4,
            sway_vertical_kick: 8.0,
            death_grace: 0.0,
        }
    }
}

impl PlayerConfig {
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            walk_speed: self.walk_speed,
            run_speed: self.run_speed,
            acceleration: self.acceleration,
            gravity: self.gravity,
            jump_height: self.jump_height,
        }
    }

    pub fn stamina(&self) -> Stamina {
        let mut stamina = Stamina::new(self.stamina_max).with_rates(
            self.stamina_drain,
            self.stamina_regen,
            self.stamina_regen_delay,
        );
        stamina.min_sprint_input = self.min_sprint_input;
        stamina
    }

    pub fn sway_params(&self) -> SwayParams {
        SwayParams {
            magnitude: self.sway_magnitude,
            duration: self.sway_duration,
            vertical_kick: self.sway_vertical_kick,
        }
    }

    pub fn look(&self) -> PlayerLook {
        PlayerLook {
            sensitivity: self.mouse_sensitivity,
            vertical_limit: self.vertical_look_limit,
            ..default()
        }
    }

    pub fn probe(&self) -> GroundProbe {
        GroundProbe {
            check_distance: self.ground_check_distance,
            ..default()
        }
    }

    pub fn body(&self) -> Body {
        Body {
            radius: self.body_radius,
            height: self.body_height,
        }
    }

    pub fn death_grace(&self) -> DeathGrace {
        DeathGrace {
            seconds: self.death_grace,
        }
    }
}

/// Enemy tuning (melee chaser).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub chase_speed: f32,
    pub stopping_distance: f32,
    /// Degrees per second
    pub angular_speed: f32,
    pub acceleration: f32,
    pub gravity: f32,
    pub attack_range: f32,
    /// Degrees
    pub cone_half_angle: f32,
    pub damage: i32,
    pub cooldown: f32,
    pub attack_delay: f32,
    pub raycast_height: f32,
    pub max_health: i32,
    pub death_grace: f32,
    pub debug_rays: bool,
    pub body_height: f32,
    pub body_radius: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            chase_speed: 3.5,
            stopping_distance: 2.0,
            angular_speed: 360.0,
            acceleration: 8.0,
            gravity: -9.81,
            attack_range: 3.0,
            cone_half_angle: 45.0,
            damage: 10,
            cooldown: 1.5,
            attack_delay: 0.4,
            raycast_height: 1.2,
            max_health: 100,
            death_grace: 2.0,
            debug_rays: false,
            body_height: 2.0,
            body_radius: 0.5,
        }
    }
}

impl EnemyConfig {
    pub fn chase_params(&self) -> ChaseParams {
        ChaseParams {
            chase_speed: self.chase_speed,
            stopping_distance: self.stopping_distance,
            angular_speed: self.angular_speed,
            acceleration: self.acceleration,
        }
    }

    /// Base locomotion (speeds are replaced by the chase tuning while chasing).
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            walk_speed: self.chase_speed,
            run_speed: self.chase_speed,
            acceleration: self.acceleration,
            gravity: self.gravity,
            jump_height: 0.0,
        }
    }

    pub fn probe(&self) -> GroundProbe {
        GroundProbe::default()
    }

    pub fn melee_params(&self) -> MeleeParams {
        MeleeParams {
            range: self.attack_range,
            cone_half_angle: self.cone_half_angle,
            damage: self.damage,
            cooldown: self.cooldown,
            attack_delay: self.attack_delay,
            ray_height: self.raycast_height,
        }
    }

    pub fn body(&self) -> Body {
        Body {
            radius: self.body_radius,
            height: self.body_height,
        }
    }

    pub fn death_grace(&self) -> DeathGrace {
        DeathGrace {
            seconds: self.death_grace,
        }
    }
}

/// Scripted player used by headless runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub hold_seconds: f32,
    pub jump_chance: f64,
    pub sprint_chance: f64,
    pub max_turn: f32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        let script = ScriptedInput::default();
        Self {
            hold_seconds: script.hold_seconds,
            jump_chance: script.jump_chance,
            sprint_chance: script.sprint_chance,
            max_turn: script.max_turn,
        }
    }
}

impl ScriptConfig {
    pub fn scripted_input(&self) -> ScriptedInput {
        ScriptedInput::new(self.hold_seconds, self.jump_chance, self.sprint_chance, self.max_turn)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("must be finite, got {}", value)))
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be > 0, got {}", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be >= 0, got {}", value)))
    }
}

fn fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("must be within [0, 1], got {}", value)))
    }
}

impl SimulationConfig {
    /// Read, parse and validate a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        crate::logger::log_info(&format!("⚙️ Loaded config {} (seed {})", path.display(), config.seed));
        Ok(config)
    }

    /// Parse and validate RON text.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tick_hz.is_finite() && self.tick_hz > 0.0) {
            return Err(invalid("tick_hz", format!("must be finite and > 0, got {}", self.tick_hz)));
        }

        let p = &self.player;
        positive("player.walk_speed", p.walk_speed)?;
        positive("player.run_speed", p.run_speed)?;
        positive("player.acceleration", p.acceleration)?;
        if !(p.gravity.is_finite() && p.gravity < 0.0) {
            return Err(invalid("player.gravity", format!("must be finite and < 0, got {}", p.gravity)));
        }
        non_negative("player.jump_height", p.jump_height)?;
        non_negative("player.mouse_sensitivity", p.mouse_sensitivity)?;
        positive("player.vertical_look_limit", p.vertical_look_limit)?;
        if p.vertical_look_limit > 90.0 {
            return Err(invalid("player.vertical_look_limit", "must be <= 90"));
        }
        if p.max_health <= 0 {
            return Err(invalid("player.max_health", format!("must be > 0, got {}", p.max_health)));
        }
        non_negative("player.ground_check_distance", p.ground_check_distance)?;
        positive("player.body_height", p.body_height)?;
        positive("player.body_radius", p.body_radius)?;
        positive("player.stamina_max", p.stamina_max)?;
        positive("player.stamina_drain", p.stamina_drain)?;
        positive("player.stamina_regen", p.stamina_regen)?;
        non_negative("player.stamina_regen_delay", p.stamina_regen_delay)?;
        fraction("player.min_sprint_input", p.min_sprint_input as f64)?;
        non_negative("player.sway_magnitude", p.sway_magnitude)?;
        positive("player.sway_duration", p.sway_duration)?;
        non_negative("player.death_grace", p.death_grace)?;

        let e = &self.enemy;
        positive("enemy.chase_speed", e.chase_speed)?;
        non_negative("enemy.stopping_distance", e.stopping_distance)?;
        positive("enemy.angular_speed", e.angular_speed)?;
        positive("enemy.acceleration", e.acceleration)?;
        if !(e.gravity.is_finite() && e.gravity < 0.0) {
            return Err(invalid("enemy.gravity", format!("must be finite and < 0, got {}", e.gravity)));
        }
        positive("enemy.attack_range", e.attack_range)?;
        if !(e.cone_half_angle > 0.0 && e.cone_half_angle <= 180.0) {
            return Err(invalid(
                "enemy.cone_half_angle",
                format!("must be within (0, 180], got {}", e.cone_half_angle),
            ));
        }
        if e.damage < 0 {
            return Err(invalid("enemy.damage", format!("must be >= 0, got {}", e.damage)));
        }
        non_negative("enemy.cooldown", e.cooldown)?;
        non_negative("enemy.attack_delay", e.attack_delay)?;
        if e.max_health <= 0 {
            return Err(invalid("enemy.max_health", format!("must be > 0, got {}", e.max_health)));
        }
        non_negative("enemy.death_grace", e.death_grace)?;
        positive("enemy.body_height", e.body_height)?;
        positive("enemy.body_radius", e.body_radius)?;

        let s = &self.script;
        positive("script.hold_seconds", s.hold_seconds)?;
        fraction("script.jump_chance", s.jump_chance)?;
        fraction("script.sprint_chance", s.sprint_chance)?;
        non_negative("script.max_turn", s.max_turn)?;

        for obstacle in &self.arena.obstacles {
            if obstacle.half_extents.iter().any(|h| !(h.is_finite() && *h > 0.0)) {
                return Err(invalid("arena.obstacles", "half extents must be > 0"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = SimulationConfig::from_ron_str("(seed: 7, enemy: (damage: 25, debug_rays: true))")
            .expect("valid config");

        assert_eq!(config.seed, 7);
        assert_eq!(config.enemy.damage, 25);
        assert!(config.enemy.debug_rays);
        assert_eq!(config.enemy.cooldown, 1.5);
        assert_eq!(config.player, PlayerConfig::default());
        assert_eq!(config.arena.enemy_spawn, [0.0, 0.0, -8.0]);
    }

    #[test]
    fn test_obstacles_from_ron() {
        let config = SimulationConfig::from_ron_str(
            "(arena: (obstacles: [(center: (0.0, 1.0, -4.0), half_extents: (2.0, 1.0, 0.25))]))",
        )
        .expect("valid config");

        let geometry = config.arena.geometry();
        assert_eq!(geometry.obstacles.len(), 1);
        assert_eq!(geometry.obstacles[0].min, Vec3::new(-2.0, 0.0, -4.25));
    }

    #[test]
    fn test_cone_angle_out_of_range_rejected() {
        let err = SimulationConfig::from_ron_str("(enemy: (cone_half_angle: 0.0))").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "enemy.cone_half_angle",
                ..
            }
        ));

        let err = SimulationConfig::from_ron_str("(enemy: (cone_half_angle: 190.0))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_sprint_threshold_must_be_fraction() {
        let mut config = SimulationConfig::default();
        config.player.min_sprint_input = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "player.min_sprint_input",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let mut config = SimulationConfig::default();
        config.enemy.chase_speed = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let mut config = SimulationConfig::default();
        config.script.max_turn = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "script.max_turn",
                ..
            })
        ));

        let mut config = SimulationConfig::default();
        config.enemy.attack_range = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.player.walk_speed = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.script.jump_chance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = SimulationConfig::default();
        config.tick_hz = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let err = SimulationConfig::from_ron_str("(seed: \"many\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimulationConfig::load("/nonexistent/skirmish.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/skirmish.ron"));
    }

    #[test]
    fn test_config_builds_components() {
        let config = SimulationConfig::default();

        assert_eq!(config.player.motion_params(), MotionParams::default());
        assert_eq!(config.player.sway_params(), SwayParams::default());
        assert_eq!(config.player.stamina(), Stamina::default());
        assert_eq!(config.enemy.melee_params(), MeleeParams::default());
        assert_eq!(config.enemy.chase_params(), ChaseParams::default());
        assert_eq!(config.player.probe(), GroundProbe::default());
    }
}
