//! Wander Simulation Core
//!
//! Blind wander AI для фоновых NPC на Bevy 0.16 ECS.
//!
//! Архитектура:
//! - ECS = state machine + интеграция движения (этот crate)
//! - Хост = scheduler кадров, рендер, физика (снаружи)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod error;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use ai::{
    spawn_wanderer, spawn_wanderer_in_world, WanderController, WanderPhase, WanderPhaseChanged,
    WanderPlugin,
};
pub use error::{WanderError, WanderResult};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use movement::{
    AgentRng, AgentTransform, MovementConfig, MovementValueRange, RandomSource, RotationDirection,
    ScriptedRandom,
};

/// Частота кадров headless симуляции
pub const HEADLESS_FRAME_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct WanderSimulationPlugin {
    pub seed: u64,
}

impl Default for WanderSimulationPlugin {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl Plugin for WanderSimulationPlugin {
    fn build(&self, app: &mut App) {
        // Не перетираем RNG, если хост уже вставил свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(self.seed));
        }
        app.add_plugins(WanderPlugin::<AgentRng>::default());
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Сам по себе в тике не используется: из него отщепляются `AgentRng`
/// при спавне агентов.
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
/// Время идёт фиксированными кадрами `1 / HEADLESS_FRAME_HZ`, а не по
/// wall clock: одинаковый seed даёт одинаковый мир.
/// Лог на уровне Info: debug-переходы фаз в тике не форматируются.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    logger::set_log_level(logger::LogLevel::Info);
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / HEADLESS_FRAME_HZ,
        )))
        .add_plugins(WanderSimulationPlugin { seed });

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
