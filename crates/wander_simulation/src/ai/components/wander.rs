//! Wander AI component: state machine + per-frame integration.
//!
//! Цикл:
//! Idle → WaitBeforeWalk → Walking → WaitBeforeRotate → (Rotating | skip) → Idle
//!
//! Архитектура:
//! - Фаза + countdown в секундах симуляции (не в кадрах)
//! - Каждая длительность сэмплируется в момент входа в фазу
//! - Delta тика тратится кусками: движение идёт по флагам текущей фазы,
//!   переход срабатывает ровно на истечении countdown, остаток delta
//!   продолжается в новой фазе
//! - Завершение цикла съедает остаток delta; новый цикл стартует на
//!   следующем тике

use bevy::prelude::*;

use crate::movement::{AgentTransform, MovementConfig, RandomSource, RotationDirection};

/// Фаза wander цикла.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum WanderPhase {
    /// Цикл не запущен
    #[default]
    Idle,
    WaitBeforeWalk,
    Walking,
    WaitBeforeRotate,
    Rotating {
        right: bool,
    },
}

/// Blind wander controller (один на агента).
///
/// Агент не видит препятствий: идёт прямо, пока не кончится фаза.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct WanderController {
    /// Внешний toggle. `false` замораживает цикл и движение целиком.
    pub wandering_enabled: bool,
    cycle_active: bool,
    walking: bool,
    rotating: bool,
    rotating_right: bool,
    phase: WanderPhase,
    /// Оставшееся время текущей фазы (секунды)
    remaining: f32,
    /// Направление, выбранное на старте цикла
    direction: RotationDirection,
}

impl Default for WanderController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WanderController {
    pub fn new(wandering_enabled: bool) -> Self {
        Self {
            wandering_enabled,
            cycle_active: false,
            walking: false,
            rotating: false,
            rotating_right: false,
            phase: WanderPhase::Idle,
            remaining: 0.0,
            direction: RotationDirection::Straight,
        }
    }

    pub fn set_wandering_enabled(&mut self, enabled: bool) {
        self.wandering_enabled = enabled;
    }

    pub fn is_cycle_active(&self) -> bool {
        self.cycle_active
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn is_rotating_right(&self) -> bool {
        self.rotating_right
    }

    pub fn phase(&self) -> WanderPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining
    }

    pub fn direction(&self) -> RotationDirection {
        self.direction
    }

    /// Per-frame entry point.
    ///
    /// Стартует цикл, если его нет, двигает countdown и применяет движение
    /// по активным флагам. При выключенном `wandering_enabled` ничего не
    /// делает: фаза стоит на паузе, transform не трогается.
    pub fn tick<T, R>(
        &mut self,
        config: &MovementConfig,
        transform: &mut T,
        rng: &mut R,
        delta_secs: f32,
    ) where
        T: AgentTransform + ?Sized,
        R: RandomSource + ?Sized,
    {
        if !self.wandering_enabled {
            return;
        }

        if !self.cycle_active {
            self.start_cycle(config, rng);
        }

        // NaN и отрицательная delta → 0
        let mut budget = delta_secs.max(0.0);

        loop {
            let step = budget.min(self.remaining);
            if step > 0.0 {
                self.integrate(config, transform, step);
                self.remaining -= step;
                budget -= step;
            }

            if self.remaining > 0.0 {
                break;
            }

            self.advance(config, rng);
            if !self.cycle_active {
                break;
            }
        }
    }

    fn start_cycle<R: RandomSource + ?Sized>(&mut self, config: &MovementConfig, rng: &mut R) {
        self.cycle_active = true;
        self.walking = false;
        self.rotating = false;
        self.direction = config.rotation_direction(rng);
        self.enter(WanderPhase::WaitBeforeWalk, config.walk_wait_duration(rng));
    }

    /// Countdown фазы истёк: переключаем флаги и входим в следующую.
    fn advance<R: RandomSource + ?Sized>(&mut self, config: &MovementConfig, rng: &mut R) {
        match self.phase {
            WanderPhase::Idle => {}

            WanderPhase::WaitBeforeWalk => {
                self.walking = true;
                self.enter(WanderPhase::Walking, config.walk_duration(rng));
            }

            WanderPhase::Walking => {
                self.walking = false;
                self.enter(WanderPhase::WaitBeforeRotate, config.rotation_wait_duration(rng));
            }

            WanderPhase::WaitBeforeRotate => {
                if self.direction.rotates() {
                    let right = self.direction.is_right();
                    self.rotating_right = right;
                    self.rotating = true;
                    self.enter(WanderPhase::Rotating { right }, config.rotation_duration(rng));
                } else {
                    self.finish_cycle();
                }
            }

            WanderPhase::Rotating { .. } => {
                self.rotating = false;
                self.finish_cycle();
            }
        }
    }

    fn enter(&mut self, phase: WanderPhase, duration_secs: i32) {
        self.phase = phase;
        self.remaining = duration_secs.max(0) as f32;
    }

    fn finish_cycle(&mut self) {
        self.cycle_active = false;
        self.phase = WanderPhase::Idle;
        self.remaining = 0.0;
    }

    fn integrate<T: AgentTransform + ?Sized>(
        &self,
        config: &MovementConfig,
        transform: &mut T,
        delta_secs: f32,
    ) {
        if self.rotating {
            let speed = if self.rotating_right {
                -config.rotate_speed
            } else {
                config.rotate_speed
            };
            let up = transform.up_vector();
            transform.rotate_degrees(up, speed * delta_secs);
        }

        if self.walking {
            let forward = transform.forward_vector();
            transform.translate(forward * config.move_speed * delta_secs);
        }
    }
}
