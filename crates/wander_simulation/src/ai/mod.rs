//! AI module — blind wander behaviour
//!
//! NPC бродит вслепую: ждёт, идёт прямо, ждёт, иногда поворачивается.
//! Препятствий не видит, навигации нет.

use std::marker::PhantomData;

use bevy::ecs::component::Mutable;
use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod spawn;
pub mod systems;

// Re-export основных типов
pub use components::{WanderController, WanderPhase};
pub use events::WanderPhaseChanged;
pub use spawn::{spawn_wanderer, spawn_wanderer_in_world};

use crate::movement::{
    AgentRng, MovementConfig, MovementValueRange, RandomSource, RotationDirection,
};

/// AI Plugin
///
/// Регистрирует wander системы в Update (тик на кадр, delta из `Time`).
/// `R` — компонент random source агентов этого app: и тик, и проверка
/// коллабораторов работают именно с ним (`ScriptedRandom` в тестах).
///
/// Порядок выполнения:
/// 1. report_incomplete_wanderers — лог для агентов без коллабораторов
/// 2. wander_tick — state machine + движение
pub struct WanderPlugin<R = AgentRng>(PhantomData<fn() -> R>);

impl<R> Default for WanderPlugin<R> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<R: RandomSource + Component<Mutability = Mutable>> Plugin for WanderPlugin<R> {
    fn build(&self, app: &mut App) {
        app.register_type::<WanderController>()
            .register_type::<WanderPhase>()
            .register_type::<MovementConfig>()
            .register_type::<MovementValueRange>()
            .register_type::<RotationDirection>()
            .add_event::<WanderPhaseChanged>()
            .add_systems(
                Update,
                (
                    systems::report_incomplete_wanderers::<R>,
                    systems::wander_tick::<R>,
                )
                    .chain(),
            );
    }
}
