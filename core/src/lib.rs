// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gift Board Core - Teams, Gift Boxes and Board State
//!
//! This crate provides everything the gift board needs apart from drawing:
//! - The four teams and their colors
//! - Validated gift box numbers (1..=25, multiples of 5 excluded)
//! - Per-team taken sets and the turn counter
//! - The rotation announcement with its timed auto-clear
//! - Pure derivations for the team grids and the stats panel

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod color_constants;
pub mod grid;
pub mod rotation;
pub mod stats;
pub mod taken;
pub mod turn;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use board::{BoardState, Toggle};
pub use grid::{grid_cells, GridCell, GRID_COLUMNS, TAKEN_MARKER};
pub use rotation::{ClearPolicy, RotationAnnouncer, ROTATION_MESSAGE_TTL};
pub use stats::{team_stats, TeamStat};
pub use taken::TakenSet;
pub use turn::TurnCounter;

/// Number of teams on the board
pub const TEAM_COUNT: usize = 4;

/// Highest number printed on a gift box
pub const MAX_GIFT_NUMBER: u8 = 25;

/// Gift boxes per team (25 candidates minus the five multiples of 5)
pub const GIFTS_PER_TEAM: usize = 20;

/// One of the four competing teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    /// Green team
    Vert,
    /// Blue team
    Bleu,
    /// Red team
    Rouge,
    /// Orange team
    Orange,
}

impl Team {
    /// All teams in index order
    pub const ALL: [Team; TEAM_COUNT] = [Team::Vert, Team::Bleu, Team::Rouge, Team::Orange];

    /// Look up a team by its raw index
    pub fn from_index(index: usize) -> Result<Self, BoardError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidTeamIndex(index))
    }

    /// Position of this team in [`Team::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name shown in grid headers and the stats panel
    pub fn name(self) -> &'static str {
        match self {
            Team::Vert => "Vert",
            Team::Bleu => "Bleu",
            Team::Rouge => "Rouge",
            Team::Orange => "Orange",
        }
    }

    /// Primary color as 8-bit RGB
    pub fn primary(self) -> [u8; 3] {
        use color_constants::team_rgb::*;
        match self {
            Team::Vert => VERT,
            Team::Bleu => BLEU,
            Team::Rouge => ROUGE,
            Team::Orange => ORANGE,
        }
    }

    /// Accent (darker) color as 8-bit RGB
    pub fn accent(self) -> [u8; 3] {
        use color_constants::team_rgb::*;
        match self {
            Team::Vert => VERT_DARK,
            Team::Bleu => BLEU_DARK,
            Team::Rouge => ROUGE_DARK,
            Team::Orange => ORANGE_DARK,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of a gift box, guaranteed to be in 1..=25 and not a multiple of 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GiftNumber(u8);

impl GiftNumber {
    /// Validate a raw box number
    pub fn new(number: u8) -> Result<Self, BoardError> {
        if number == 0 || number > MAX_GIFT_NUMBER || number % 5 == 0 {
            return Err(BoardError::InvalidGiftNumber(number));
        }
        Ok(Self(number))
    }

    /// The raw number printed on the box
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every legal gift number in ascending order
    pub fn all() -> impl Iterator<Item = GiftNumber> {
        (1..=MAX_GIFT_NUMBER).filter_map(|n| GiftNumber::new(n).ok())
    }
}

impl TryFrom<u8> for GiftNumber {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GiftNumber::new(value)
    }
}

impl From<GiftNumber> for u8 {
    fn from(number: GiftNumber) -> Self {
        number.0
    }
}

impl std::fmt::Display for GiftNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a table rotation announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The banner text announced for this direction
    pub fn message(self) -> &'static str {
        match self {
            Direction::Left => "🎅 Rotation à gauche !",
            Direction::Right => "🎅 Rotation à droite !",
        }
    }
}

/// Errors raised while turning raw input into board types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Team index outside 0..=3
    #[error("Invalid team index: {0}")]
    InvalidTeamIndex(usize),

    /// Gift number outside 1..=25 or a multiple of 5
    #[error("Invalid gift number: {0}")]
    InvalidGiftNumber(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_index_roundtrip() {
        for (i, team) in Team::ALL.iter().enumerate() {
            assert_eq!(team.index(), i);
            assert_eq!(Team::from_index(i), Ok(*team));
        }
        assert_eq!(Team::from_index(4), Err(BoardError::InvalidTeamIndex(4)));
    }

    #[test]
    fn test_gift_number_domain() {
        assert!(GiftNumber::new(0).is_err());
        assert!(GiftNumber::new(26).is_err());
        for n in [5, 10, 15, 20, 25] {
            assert_eq!(GiftNumber::new(n), Err(BoardError::InvalidGiftNumber(n)));
        }
        assert_eq!(GiftNumber::new(24).map(GiftNumber::get), Ok(24));
    }

    #[test]
    fn test_all_gift_numbers() {
        let all: Vec<u8> = GiftNumber::all().map(GiftNumber::get).collect();
        assert_eq!(all.len(), GIFTS_PER_TEAM);
        assert_eq!(&all[..5], &[1, 2, 3, 4, 6]);
        assert!(all.iter().all(|n| n % 5 != 0));
    }

    #[test]
    fn test_gift_number_serde_rejects_multiples_of_five() {
        let ok: GiftNumber = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<GiftNumber>("10").is_err());
    }

    #[test]
    fn test_direction_messages_differ() {
        assert_ne!(Direction::Left.message(), Direction::Right.message());
        assert!(Direction::Left.message().contains("gauche"));
        assert!(Direction::Right.message().contains("droite"));
    }
}
