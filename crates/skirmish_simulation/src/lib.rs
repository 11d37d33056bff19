//! Skirmish Simulation Core
//!
//! Bevy 0.16 ECS simulation of a first-person melee duel: one player against
//! one melee enemy bound to it at spawn.
//!
//! Каждый компонент-алгоритм (motion, stamina, attack, sway, health) это
//! чистая функция над `FrameContext` + trait-object collaborators. ECS системы
//! только собирают контекст кадра и вызывают ядро.
//!
//! Порядок тика (FixedUpdate, `SimulationSet`):
//! Sense → Player → Enemy → Resolve → Cleanup

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod arena;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;
pub mod movement;
pub mod player;
pub mod shared;
pub mod spawn;

// Re-export для удобства
pub use ai::AIPlugin;
pub use arena::{ArenaPlugin, HudText, Puppet};
pub use combat::{CombatPlugin, DamageDealt, DamageRequest, EntityDied};
pub use components::*;
pub use config::{ConfigError, SimulationConfig};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use player::{PlayerInput, PlayerPlugin, ScriptedInput};
pub use spawn::{spawn_duel, spawn_enemy, spawn_player, Duel};

/// Фазы simulation tick (FixedUpdate), выполняются строго по порядку.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Input + body snapshot
    Sense,
    /// Player frame
    Player,
    /// Enemy re-snapshot + enemy frames
    Enemy,
    /// Damage application, death
    Resolve,
    /// Despawn, separation, puppets
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Берёт `SimulationConfig` из ресурса если он вставлен заранее, иначе
/// дефолтный конфиг.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Sense,
                SimulationSet::Player,
                SimulationSet::Enemy,
                SimulationSet::Resolve,
                SimulationSet::Cleanup,
            )
                .chain(),
        );

        app
            // Fixed timestep (60Hz по умолчанию)
            .insert_resource(Time::<Fixed>::from_hz(config.tick_hz))
            // Детерминистичный RNG (seed из конфига)
            .insert_resource(DeterministicRng::new(config.seed))
            .insert_resource(config.arena.geometry())
            .insert_resource(config)
            .add_plugins((ArenaPlugin, CombatPlugin, PlayerPlugin, AIPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Ничего не спавнит: вызывающий код делает `spawn_duel` сам.
pub fn create_headless_app(seed: u64) -> App {
    create_app_with_config(SimulationConfig {
        seed,
        ..default()
    })
}

/// То же, но с полным конфигом (headless binary, тесты с тюнингом).
pub fn create_app_with_config(config: SimulationConfig) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(config)
        .add_plugins(SimulationPlugin);

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
