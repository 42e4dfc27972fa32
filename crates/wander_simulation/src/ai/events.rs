//! AI Events — фазовые переходы wander агентов
//!
//! Хост слушает их, чтобы переключать анимации (idle/walk/turn).

use bevy::prelude::*;

use crate::ai::WanderPhase;

/// Агент закончил тик в другой фазе, чем начал.
///
/// Большая delta может пройти несколько фаз за один тик: в событии только
/// начальная и конечная.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct WanderPhaseChanged {
    pub entity: Entity,
    pub from: WanderPhase,
    pub to: WanderPhase,
}
