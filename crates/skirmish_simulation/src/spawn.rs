//! Spawn helpers for the duel.
//!
//! Каждый helper создаёт entity с полным набором компонентов. `spawn_duel`
//! дополнительно делает binding step: враг получает `CombatTarget` на игрока
//! один раз, поиска цели в рантайме нет.

use bevy::prelude::*;

use crate::arena::Puppet;
use crate::combat::{AttackState, DebugRays, HitSway};
use crate::components::{
    Actor, ActorTag, BindingStatus, CombatTarget, Enemy, Health, MotionState, Player,
};
use crate::config::{EnemyConfig, PlayerConfig, SimulationConfig};

/// Entities of a spawned duel.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duel {
    pub player: Entity,
    pub enemy: Entity,
}

/// Spawn helper для игрока
///
/// - Actor(Player) + Transform на `position`
/// - motion/ground/look компоненты
/// - Stamina, HitSway (+ SwayParams), Health
pub fn spawn_player(world: &mut World, config: &PlayerConfig, position: Vec3) -> Entity {
    world
        .spawn((
            Actor {
                tag: ActorTag::Player,
            },
            Player,
            Transform::from_translation(position),
            config.body(),
            MotionState::default(),
            config.motion_params(),
            config.probe(),
            config.look(),
            config.stamina(),
            HitSway::default(),
            config.sway_params(),
            Health::new(config.max_health),
            config.death_grace(),
        ))
        .id()
}

/// Spawn helper для врага
///
/// Без цели: до binding step враг пропускает свои кадры.
pub fn spawn_enemy(world: &mut World, config: &EnemyConfig, position: Vec3) -> Entity {
    world
        .spawn((
            Actor {
                tag: ActorTag::Enemy,
            },
            Enemy,
            Transform::from_translation(position),
            config.body(),
            MotionState::default(),
            config.motion_params(),
            config.probe(),
            config.chase_params(),
            config.melee_params(),
            AttackState::default(),
            CombatTarget(None),
            BindingStatus::default(),
            DebugRays {
                enabled: config.debug_rays,
                last: None,
            },
            (
                Puppet::default(),
                Health::new(config.max_health),
                config.death_grace(),
            ),
        ))
        .id()
}

/// Spawn player + enemy from config and bind the enemy to the player.
///
/// The returned `Duel` is also inserted as a resource.
pub fn spawn_duel(world: &mut World, config: &SimulationConfig) -> Duel {
    let player = spawn_player(
        world,
        &config.player,
        Vec3::from_array(config.arena.player_spawn),
    );
    let enemy = spawn_enemy(
        world,
        &config.enemy,
        Vec3::from_array(config.arena.enemy_spawn),
    );

    // Binding step
    world.entity_mut(enemy).insert(CombatTarget(Some(player)));

    crate::logger::log_info(&format!(
        "⚔️ Duel spawned: player {:?}, enemy {:?}",
        player, enemy
    ));

    let duel = Duel { player, enemy };
    world.insert_resource(duel);
    duel
}
