// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::{Duration, Instant};

use gift_board_core::{BoardState, ClearPolicy, Direction, ROTATION_MESSAGE_TTL};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn left_message_shows_then_clears() {
    let start = Instant::now();
    let mut board = BoardState::new();

    board.announce_rotation(Direction::Left, start);
    assert_eq!(board.rotation_message(), Some("🎅 Rotation à gauche !"));

    board.tick(start + ms(1000));
    assert_eq!(board.rotation_message(), Some("🎅 Rotation à gauche !"));

    assert!(board.tick(start + ROTATION_MESSAGE_TTL));
    assert_eq!(board.rotation_message(), None);
    assert_eq!(board.next_deadline(), None);
}

#[test]
fn stacked_timers_clear_second_message_early() {
    let start = Instant::now();
    let mut board = BoardState::with_policy(ClearPolicy::Stacked);

    board.announce_rotation(Direction::Left, start);
    board.announce_rotation(Direction::Right, start + ms(800));
    assert_eq!(board.rotation_message(), Some(Direction::Right.message()));

    // The left press's clear fires 1200 ms into the right message
    assert!(board.tick(start + ms(2000)));
    assert_eq!(board.rotation_message(), None);

    // The right press's clear still fires later, with nothing to clear
    assert_eq!(board.next_deadline(), Some(start + ms(2800)));
    assert!(!board.tick(start + ms(2800)));
    assert_eq!(board.next_deadline(), None);
}

#[test]
fn stacked_stale_clear_hits_a_third_message() {
    let start = Instant::now();
    let mut board = BoardState::with_policy(ClearPolicy::Stacked);

    board.announce_rotation(Direction::Left, start);
    board.announce_rotation(Direction::Right, start + ms(500));
    board.tick(start + ms(2000));
    board.announce_rotation(Direction::Left, start + ms(2100));

    // Right's clear was armed for 2500 ms and wipes the newest message
    assert!(board.tick(start + ms(2500)));
    assert_eq!(board.rotation_message(), None);
}

#[test]
fn reschedule_keeps_second_message_for_full_ttl() {
    let start = Instant::now();
    let mut board = BoardState::with_policy(ClearPolicy::Reschedule);

    board.announce_rotation(Direction::Left, start);
    board.announce_rotation(Direction::Right, start + ms(800));

    assert!(!board.tick(start + ms(2000)));
    assert_eq!(board.rotation_message(), Some(Direction::Right.message()));

    assert!(!board.tick(start + ms(2799)));
    assert!(board.tick(start + ms(2800)));
    assert_eq!(board.rotation_message(), None);
}

#[test]
fn default_policy_reschedules() {
    assert_eq!(BoardState::new().rotation().policy(), ClearPolicy::Reschedule);
}

#[test]
fn toggles_do_not_touch_the_banner() {
    let start = Instant::now();
    let mut board = BoardState::new();
    board.announce_rotation(Direction::Right, start);

    let three = gift_board_core::GiftNumber::new(3).unwrap();
    board.toggle(gift_board_core::Team::Bleu, three);
    assert_eq!(board.rotation_message(), Some(Direction::Right.message()));
    assert_eq!(board.next_deadline(), Some(start + ROTATION_MESSAGE_TTL));
}

#[test]
fn unmount_with_armed_clear_is_clean() {
    let start = Instant::now();
    let mut board = BoardState::new();
    board.announce_rotation(Direction::Left, start);

    board.unmount();
    assert_eq!(board.next_deadline(), None);
    assert!(!board.tick(start + ms(5000)));
}
