// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-team tallies for the stats panel

use crate::{BoardState, Team, TEAM_COUNT};

/// How many boxes a team has taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStat {
    pub team: Team,
    pub taken: usize,
}

impl TeamStat {
    pub fn name(&self) -> &'static str {
        self.team.name()
    }

    pub fn color(&self) -> [u8; 3] {
        self.team.accent()
    }
}

/// Current tally for every team in index order
pub fn team_stats(board: &BoardState) -> [TeamStat; TEAM_COUNT] {
    Team::ALL.map(|team| TeamStat {
        team,
        taken: board.taken(team).len(),
    })
}
