//! AI systems

pub mod wander;

// Re-export all systems
pub use wander::*;
