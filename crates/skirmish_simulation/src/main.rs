//! Headless дуэль
//!
//! `skirmish_simulation [config.ron]`: загружает конфиг (дефолтный если путь
//! не передан), спавнит дуэль, игрок управляется `ScriptedInput`.

use std::time::Duration;

use bevy::time::TimeUpdateStrategy;
use skirmish_simulation::{
    create_app_with_config, log_error, log_info, spawn_duel, Dead, Health, HudText,
    SimulationConfig,
};

fn main() {
    skirmish_simulation::init_logger();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log_error(&format!("❌ {}", err));
                std::process::exit(1);
            }
        },
        None => SimulationConfig::default(),
    };

    log_info(&format!(
        "Starting skirmish simulation (seed: {}, {} ticks @ {} Hz)",
        config.seed, config.ticks, config.tick_hz
    ));

    let ticks = config.ticks;
    let tick = Duration::from_secs_f64(1.0 / config.tick_hz);
    let report_every = (config.tick_hz.round() as u32).max(1);
    let script = config.script.scripted_input();

    let mut app = create_app_with_config(config.clone());
    app.insert_resource(TimeUpdateStrategy::ManualDuration(tick))
        .insert_resource(script);
    let duel = spawn_duel(app.world_mut(), &config);

    // Первый update только запускает часы (delta = 0)
    app.update();

    for tick in 1..=ticks {
        app.update();

        let world = app.world();
        let player_gone = world.get_entity(duel.player).is_err();
        let enemy_dead = world.get::<Dead>(duel.enemy).is_some();

        if tick % report_every == 0 || player_gone {
            let hud = world.resource::<HudText>();
            let enemy_hp = world.get::<Health>(duel.enemy).map(|h| h.current).unwrap_or(0);
            log_info(&format!(
                "Tick {}: {} | {} | enemy HP: {}",
                tick, hud.health, hud.stamina, enemy_hp
            ));
        }

        if player_gone {
            log_info(&format!("💀 Player fell at tick {}", tick));
            break;
        }
        if enemy_dead {
            log_info(&format!("🏆 Enemy fell at tick {}", tick));
            break;
        }
    }

    log_info("Simulation complete!");
}
