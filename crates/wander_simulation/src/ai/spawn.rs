//! Spawn helpers для wander агентов.

use bevy::prelude::*;

use crate::ai::WanderController;
use crate::error::{WanderError, WanderResult};
use crate::movement::{AgentRng, MovementConfig};
use crate::DeterministicRng;

/// Spawn wander агента со всеми коллабораторами.
///
/// Config проверяется здесь: невалидный агент не попадает в мир.
/// Собственный RNG агента отщепляется от глобального `DeterministicRng`,
/// поэтому тот же seed + тот же порядок спавна дают тот же мир.
pub fn spawn_wanderer(
    commands: &mut Commands,
    rng: &mut DeterministicRng,
    config: MovementConfig,
    transform: Transform,
) -> WanderResult<Entity> {
    config.validate()?;

    let agent_rng = AgentRng::fork(&mut rng.rng);
    let entity = commands
        .spawn((transform, config, WanderController::default(), agent_rng))
        .id();

    Ok(entity)
}

/// То же самое напрямую в `World` (headless runner, тесты).
///
/// Мир без `DeterministicRng` → `MissingCollaborator`, агент не спавнится.
pub fn spawn_wanderer_in_world(
    world: &mut World,
    config: MovementConfig,
    transform: Transform,
) -> WanderResult<Entity> {
    config.validate()?;

    let mut rng = world
        .get_resource_mut::<DeterministicRng>()
        .ok_or(WanderError::MissingCollaborator("DeterministicRng"))?;
    let agent_rng = AgentRng::fork(&mut rng.rng);
    let entity = world
        .spawn((transform, config, WanderController::default(), agent_rng))
        .id();

    Ok(entity)
}
