//! Board-wide controls and tallies

mod controls;
mod stats;

pub use controls::RotationControls;
pub use stats::{StatsPanel, STATS_TITLE};
