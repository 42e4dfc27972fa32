//! Movement config: диапазоны длительностей, скорости, randomized queries.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{WanderError, WanderResult};
use crate::movement::RandomSource;

/// Пара min/max для длительностей фаз (секунды).
///
/// Сэмплируется как `[minimum, maximum)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementValueRange {
    pub minimum: i32,
    pub maximum: i32,
}

impl Default for MovementValueRange {
    fn default() -> Self {
        Self {
            minimum: 1,
            maximum: 3,
        }
    }
}

impl MovementValueRange {
    pub const fn new(minimum: i32, maximum: i32) -> Self {
        Self { minimum, maximum }
    }

    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.range(self.minimum, self.maximum)
    }

    fn validate(&self, name: &'static str) -> WanderResult<()> {
        if self.minimum < 0 || self.minimum > self.maximum {
            return Err(WanderError::InvalidConfigRange {
                name,
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        Ok(())
    }
}

/// Куда поворачивать в конце цикла.
///
/// Pick 0 → Straight, 1 → Left, 2 → Right: поворот в 2/3 циклов,
/// поровну влево и вправо.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum RotationDirection {
    /// Без фазы поворота
    #[default]
    Straight,
    Left,
    Right,
}

impl RotationDirection {
    pub const fn from_pick(pick: u8) -> Self {
        match pick {
            1 => Self::Left,
            2 => Self::Right,
            _ => Self::Straight,
        }
    }

    pub const fn rotates(self) -> bool {
        !matches!(self, Self::Straight)
    }

    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }
}

/// Параметры блуждания агента.
///
/// Один и тот же диапазон задаёт и ожидание перед фазой, и длительность самой
/// фазы (`walk` для ходьбы, `rotation` для поворота). Каждый query сэмплирует
/// заново, ничего не кешируется.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct MovementConfig {
    pub rotation: MovementValueRange,
    pub walk: MovementValueRange,
    /// Скорость ходьбы (units/sec)
    pub move_speed: f32,
    /// Скорость поворота (degrees/sec)
    pub rotate_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            rotation: MovementValueRange::default(),
            walk: MovementValueRange::default(),
            move_speed: 3.0,
            rotate_speed: 100.0,
        }
    }
}

impl MovementConfig {
    pub fn rotation_direction<R: RandomSource + ?Sized>(&self, rng: &mut R) -> RotationDirection {
        RotationDirection::from_pick(rng.pick_of_three())
    }

    pub fn rotation_duration<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        self.rotation.sample(rng)
    }

    pub fn rotation_wait_duration<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        self.rotation.sample(rng)
    }

    pub fn walk_duration<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        self.walk.sample(rng)
    }

    pub fn walk_wait_duration<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i32 {
        self.walk.sample(rng)
    }

    /// Проверка при спавне: tick path потом не проверяет ничего.
    pub fn validate(&self) -> WanderResult<()> {
        self.rotation.validate("rotation")?;
        self.walk.validate("walk")?;
        validate_speed("move_speed", self.move_speed)?;
        validate_speed("rotate_speed", self.rotate_speed)?;
        Ok(())
    }

    /// JSON → validated config. Отсутствующие поля берутся из `Default`.
    pub fn from_json_str(json: &str) -> WanderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_json(path: impl AsRef<Path>) -> WanderResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

fn validate_speed(name: &'static str, value: f32) -> WanderResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(WanderError::InvalidSpeed { name, value });
    }
    Ok(())
}
