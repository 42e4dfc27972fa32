//! Random source для wander решений.
//!
//! - `AgentRng` — собственный ChaCha8 поток каждого агента (production)
//! - `ScriptedRandom` — заранее заданные значения (тесты, отладка)
//!
//! Оба реализуют `RandomSource`, поэтому `WanderController` и системы не
//! знают, откуда берутся числа.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait RandomSource {
    /// Равномерное целое из `[min, max)`.
    ///
    /// Схлопнутый диапазон (`min >= max`) возвращает `min`.
    fn range(&mut self, min: i32, max: i32) -> i32;

    /// Равномерный выбор из {0, 1, 2}.
    fn pick_of_three(&mut self) -> u8;
}

/// Per-agent deterministic RNG.
///
/// Агенты не делят RNG state: порядок обработки entities в системе не
/// влияет на результат.
#[derive(Component, Debug, Clone)]
pub struct AgentRng(ChaCha8Rng);

impl AgentRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Отщепляет независимый поток от родительского RNG.
    pub fn fork(parent: &mut ChaCha8Rng) -> Self {
        Self::from_seed(parent.gen::<u64>())
    }
}

impl RandomSource for AgentRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.0.gen_range(min..max)
    }

    fn pick_of_three(&mut self) -> u8 {
        self.0.gen_range(0..3)
    }
}

/// Scripted random source: выдаёт заданные значения по кругу.
///
/// `durations` возвращаются как есть (без учёта `min`/`max`), чтобы тест мог
/// задать точные длительности фаз. Пустой скрипт откатывается на `min` и `0`.
#[derive(Component, Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: Vec<u8>,
    durations: Vec<i32>,
    next_pick: usize,
    next_duration: usize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<u8>>, durations: impl Into<Vec<i32>>) -> Self {
        Self {
            picks: picks.into(),
            durations: durations.into(),
            next_pick: 0,
            next_duration: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn range(&mut self, min: i32, _max: i32) -> i32 {
        let Some(&value) = self.durations.get(self.next_duration) else {
            return min;
        };
        self.next_duration = (self.next_duration + 1) % self.durations.len();
        value
    }

    fn pick_of_three(&mut self) -> u8 {
        let Some(&value) = self.picks.get(self.next_pick) else {
            return 0;
        };
        self.next_pick = (self.next_pick + 1) % self.picks.len();
        value
    }
}
