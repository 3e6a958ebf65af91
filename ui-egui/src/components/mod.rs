//! Modular UI components organized by feature

pub mod game;
pub mod grid;

// Re-export commonly used components
pub use game::{RotationControls, StatsPanel};
pub use grid::{GridInteraction, TeamGridRenderer};
