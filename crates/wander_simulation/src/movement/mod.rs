//! Movement domain — параметры и коллабораторы блуждания
//!
//! Содержит:
//! - MovementConfig / MovementValueRange (диапазоны длительностей, скорости)
//! - RotationDirection (Straight / Left / Right)
//! - RandomSource (AgentRng, ScriptedRandom)
//! - AgentTransform (узкий интерфейс к Transform)

pub mod config;
pub mod random;
pub mod transform;


// Re-export all
pub use config::*;
pub use random::*;
pub use transform::*;
