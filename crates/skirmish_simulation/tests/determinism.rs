//! Тесты детерминизма
//!
//! Дуэль со scripted игроком: одинаковый seed даёт идентичный мир,
//! другой seed даёт другой прогон.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use skirmish_simulation::combat::Stamina;
use skirmish_simulation::{
    create_app_with_config, spawn_duel, world_snapshot, Health, SimulationConfig,
};

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 600;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 300;

    // Запускаем 3 раза — все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seed_different_run() {
    const TICK_COUNT: usize = 300;

    assert_ne!(
        run_simulation(1, TICK_COUNT),
        run_simulation(2, TICK_COUNT),
        "scripted input ignored the seed"
    );
}

/// Запускает дуэль и возвращает snapshot мира (transforms, health, stamina)
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let config = SimulationConfig {
        seed,
        ..default()
    };
    let tick = Duration::from_secs_f64(1.0 / config.tick_hz);

    let mut app = create_app_with_config(config.clone());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(tick))
        .insert_resource(config.script.scripted_input());
    spawn_duel(app.world_mut(), &config);

    for _ in 0..tick_count {
        app.update();
    }

    let world = app.world_mut();
    let mut snapshot = world_snapshot::<Transform>(world);
    snapshot.extend(world_snapshot::<Health>(world));
    snapshot.extend(world_snapshot::<Stamina>(world));
    snapshot
}
