//! Headless wander симуляция
//!
//! Запускает Bevy App без рендера: несколько NPC бродят 1000 тиков.
//!
//! Usage: `wander_simulation [config.json] [seed]`

use bevy::prelude::*;
use wander_simulation::{
    create_headless_app, log_info, spawn_wanderer_in_world, MovementConfig, WanderResult,
};

const AGENT_COUNT: usize = 8;
const TICK_COUNT: usize = 1000;

fn main() {
    if let Err(error) = run() {
        eprintln!("wander_simulation: {error}");
        std::process::exit(1);
    }
}

fn run() -> WanderResult<()> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => MovementConfig::load_json(path)?,
        None => MovementConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut app = create_headless_app(seed);
    log_info(&format!("Starting headless wander simulation (seed: {seed})"));

    // Агенты на линии через 4m
    let mut agents = Vec::with_capacity(AGENT_COUNT);
    for i in 0..AGENT_COUNT {
        let transform = Transform::from_xyz(i as f32 * 4.0, 0.0, 0.0);
        agents.push(spawn_wanderer_in_world(app.world_mut(), config.clone(), transform)?);
    }

    for tick in 0..TICK_COUNT {
        app.update();

        if tick % 100 == 0 {
            for &entity in &agents {
                if let Some(transform) = app.world().get::<Transform>(entity) {
                    log_info(&format!("Tick {tick}: {entity:?} at {:?}", transform.translation));
                }
            }
        }
    }

    log_info("Simulation complete!");
    Ok(())
}
