// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board state shared by every part of the view

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::rotation::{Announcement, ClearPolicy, RotationAnnouncer};
use crate::{Direction, GiftNumber, TakenSet, Team, TurnCounter, TEAM_COUNT};

/// Outcome of clicking a gift box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The box was available and is now taken; the turn advanced
    Taken,
    /// The box was taken and is available again; the turn did not move
    Released,
}

/// Everything a mounted board owns: one taken set per team, the turn
/// counter and the rotation banner.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    taken: [TakenSet; TEAM_COUNT],
    turn: TurnCounter,
    rotation: RotationAnnouncer,
}

impl BoardState {
    /// Fresh board: nothing taken, turn 0, no message
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh board whose rotation banner follows `policy`
    pub fn with_policy(policy: ClearPolicy) -> Self {
        Self {
            rotation: RotationAnnouncer::new(policy),
            ..Self::default()
        }
    }

    /// Flip a gift box between available and taken.
    ///
    /// Taking advances the turn, releasing does not.
    pub fn toggle(&mut self, team: Team, number: GiftNumber) -> Toggle {
        let set = &mut self.taken[team.index()];
        let outcome = if set.remove(number) {
            Toggle::Released
        } else {
            set.insert(number);
            self.turn.advance();
            Toggle::Taken
        };

        debug!(
            %team,
            number = number.get(),
            ?outcome,
            turn = self.turn.get(),
            "Gift box toggled"
        );
        outcome
    }

    pub fn is_taken(&self, team: Team, number: GiftNumber) -> bool {
        self.taken[team.index()].contains(number)
    }

    /// Taken set of one team
    pub fn taken(&self, team: Team) -> &TakenSet {
        &self.taken[team.index()]
    }

    /// Turn index in 0..=3
    pub fn current_turn(&self) -> u8 {
        self.turn.get()
    }

    /// Show a rotation message, see [`RotationAnnouncer::announce`]
    pub fn announce_rotation(&mut self, direction: Direction, now: Instant) {
        self.rotation.announce(direction, now);
    }

    pub fn rotation_message(&self) -> Option<&'static str> {
        self.rotation.message()
    }

    pub fn announcement(&self) -> Option<&Announcement> {
        self.rotation.current()
    }

    pub fn rotation(&self) -> &RotationAnnouncer {
        &self.rotation
    }

    /// Fire due timers; true when something visible changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.rotation.tick(now)
    }

    /// When the host loop must wake up next, if ever
    pub fn next_deadline(&self) -> Option<Instant> {
        self.rotation.next_deadline()
    }

    pub fn time_until_clear(&self, now: Instant) -> Option<Duration> {
        self.rotation.time_until_clear(now)
    }

    /// Release everything scheduled before the view goes away
    pub fn unmount(&mut self) {
        let armed = self.rotation.pending_clears();
        self.rotation.cancel_all();
        info!(armed, "Board unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gift(n: u8) -> GiftNumber {
        GiftNumber::new(n).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        for team in Team::ALL {
            assert!(board.taken(team).is_empty());
        }
        assert_eq!(board.current_turn(), 0);
        assert_eq!(board.rotation_message(), None);
        assert_eq!(board.next_deadline(), None);
    }

    #[test]
    fn test_toggle_touches_one_team() {
        let mut board = BoardState::new();
        assert_eq!(board.toggle(Team::Rouge, gift(7)), Toggle::Taken);

        assert!(board.is_taken(Team::Rouge, gift(7)));
        for team in [Team::Vert, Team::Bleu, Team::Orange] {
            assert!(!board.is_taken(team, gift(7)));
        }
    }

    #[test]
    fn test_release_does_not_advance_turn() {
        let mut board = BoardState::new();
        board.toggle(Team::Vert, gift(1));
        assert_eq!(board.current_turn(), 1);

        assert_eq!(board.toggle(Team::Vert, gift(1)), Toggle::Released);
        assert_eq!(board.current_turn(), 1);
        assert!(!board.is_taken(Team::Vert, gift(1)));
    }

    #[test]
    fn test_announcement_records_when_shown() {
        let start = Instant::now();
        let later = start + std::time::Duration::from_millis(700);
        let mut board = BoardState::new();
        assert!(board.announcement().is_none());

        board.announce_rotation(Direction::Left, start);
        board.announce_rotation(Direction::Right, later);
        let shown = board.announcement().unwrap();
        assert_eq!(shown.direction, Direction::Right);
        assert_eq!(shown.shown_at, later);
    }

    #[test]
    fn test_unmount_cancels_clears() {
        let now = Instant::now();
        let mut board = BoardState::with_policy(ClearPolicy::Stacked);
        board.announce_rotation(Direction::Left, now);
        board.announce_rotation(Direction::Right, now);
        assert_eq!(board.rotation().pending_clears(), 2);

        board.unmount();
        assert_eq!(board.rotation().pending_clears(), 0);
        assert_eq!(board.rotation_message(), None);
        assert!(!board.tick(now + crate::ROTATION_MESSAGE_TTL));
    }
}
