// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn tracking

use crate::TEAM_COUNT;

/// Index of the team whose turn it is, always in 0..=3.
///
/// Only taking a box advances it; the view does not display it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TurnCounter(u8);

impl TurnCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current turn index
    pub fn get(self) -> u8 {
        self.0
    }

    /// Move to the next team, wrapping after the last one
    pub fn advance(&mut self) -> u8 {
        self.0 = (self.0 + 1) % TEAM_COUNT as u8;
        self.0
    }
}
