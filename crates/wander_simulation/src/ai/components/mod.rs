//! AI components

pub mod wander;


// Re-export all components
pub use wander::*;
