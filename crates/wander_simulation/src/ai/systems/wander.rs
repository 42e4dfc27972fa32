//! Wander systems (per-frame tick, spawn validation).

use bevy::ecs::component::Mutable;
use bevy::prelude::*;

use crate::ai::{WanderController, WanderPhaseChanged};
use crate::error::WanderError;
use crate::logger::{log_enabled, LogLevel};
use crate::movement::{MovementConfig, RandomSource};

/// Система: wander tick для всех агентов
///
/// `R` — компонент random source агента (`AgentRng` в production,
/// `ScriptedRandom` в тестах).
/// `Changed<Transform>` ставится только если тик реально сдвинул или
/// повернул агента: выключенные и ждущие NPC его не триггерят.
pub fn wander_tick<R: RandomSource + Component<Mutability = Mutable>>(
    mut agents: Query<(
        Entity,
        &mut WanderController,
        &MovementConfig,
        &mut Transform,
        &mut R,
    )>,
    mut phase_events: EventWriter<WanderPhaseChanged>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (entity, mut controller, config, mut transform, mut rng) in agents.iter_mut() {
        if !controller.wandering_enabled {
            continue;
        }

        let from = controller.phase();
        let before = *transform;
        controller.tick(config, transform.bypass_change_detection(), &mut *rng, delta);
        if *transform != before {
            transform.set_changed();
        }
        let to = controller.phase();

        if from == to {
            continue;
        }

        phase_events.write(WanderPhaseChanged { entity, from, to });

        if log_enabled(LogLevel::Debug) {
            crate::log(&format!(
                "🚶 Wander: {:?} {:?} → {:?} at {:?}",
                entity, from, to, transform.translation
            ));
        }
    }
}

/// Система: проверка только что добавленных wander агентов
///
/// Агент без config / transform / random source никогда не попадёт в
/// `wander_tick` query, поэтому сообщаем об этом сразу, а не молча стоим.
pub fn report_incomplete_wanderers<R: RandomSource + Component>(
    added: Query<
        (Entity, Has<MovementConfig>, Has<Transform>, Has<R>),
        Added<WanderController>,
    >,
) {
    for (entity, has_config, has_transform, has_rng) in added.iter() {
        let missing = if !has_config {
            "MovementConfig"
        } else if !has_transform {
            "Transform"
        } else if !has_rng {
            "random source"
        } else {
            continue;
        };

        let error = WanderError::MissingCollaborator(missing);
        crate::log_error(&format!("Wander: {:?} not ticked: {}", entity, error));
    }
}
