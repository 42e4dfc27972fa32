//! Ошибки конфигурации wander agent'ов.
//!
//! Все ошибки возникают при настройке/спавне. `WanderController::tick`
//! никогда не падает.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WanderError {
    /// Диапазон длительностей пустой или отрицательный.
    #[error("invalid {name} range: minimum {minimum} must be >= 0 and <= maximum {maximum}")]
    InvalidConfigRange {
        name: &'static str,
        minimum: i32,
        maximum: i32,
    },

    #[error("invalid {name}: {value} (must be finite and positive)")]
    InvalidSpeed { name: &'static str, value: f32 },

    /// Агенту не хватает transform / random source / config.
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WanderResult<T> = Result<T, WanderError>;
