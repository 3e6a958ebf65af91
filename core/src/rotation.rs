// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rotation announcements with a timed auto-clear
//!
//! Pressing a rotation button shows a short message and arms a clear that
//! fires [`ROTATION_MESSAGE_TTL`] later. Clears are deadlines owned by the
//! announcer and fired by [`RotationAnnouncer::tick`], so the host loop only
//! has to poll once per frame and wake up at [`RotationAnnouncer::next_deadline`].

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::Direction;

/// How long a rotation message stays on screen
pub const ROTATION_MESSAGE_TTL: Duration = Duration::from_millis(2000);

/// What happens to an armed clear when a new announcement arrives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Cancel the armed clear and arm a fresh one for the new message
    #[default]
    Reschedule,
    /// Keep every clear armed; whichever fires first empties the banner,
    /// even if a newer message is showing
    Stacked,
}

/// The message currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub direction: Direction,
    pub shown_at: Instant,
}

impl Announcement {
    pub fn text(&self) -> &'static str {
        self.direction.message()
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingClear {
    id: u64,
    deadline: Instant,
}

/// Transient rotation message state
#[derive(Debug, Clone)]
pub struct RotationAnnouncer {
    policy: ClearPolicy,
    current: Option<Announcement>,
    pending: Vec<PendingClear>,
    next_id: u64,
}

impl Default for RotationAnnouncer {
    fn default() -> Self {
        Self::new(ClearPolicy::default())
    }
}

impl RotationAnnouncer {
    pub fn new(policy: ClearPolicy) -> Self {
        Self {
            policy,
            current: None,
            pending: Vec::new(),
            next_id: 0,
        }
    }

    pub fn policy(&self) -> ClearPolicy {
        self.policy
    }

    /// Show the message for `direction` and arm its clear
    pub fn announce(&mut self, direction: Direction, now: Instant) {
        if self.policy == ClearPolicy::Reschedule && !self.pending.is_empty() {
            trace!(cancelled = self.pending.len(), "Cancelling armed rotation clear");
            self.pending.clear();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(PendingClear {
            id,
            deadline: now + ROTATION_MESSAGE_TTL,
        });
        self.current = Some(Announcement {
            direction,
            shown_at: now,
        });

        info!(?direction, clear_id = id, armed = self.pending.len(), "Rotation announced");
    }

    /// Fire every clear whose deadline has passed.
    ///
    /// Returns true when the visible message went away.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.pending.len();
        self.pending.retain(|clear| {
            let due = clear.deadline <= now;
            if due {
                trace!(clear_id = clear.id, "Rotation clear fired");
            }
            !due
        });

        if self.pending.len() == before {
            return false;
        }
        self.current.take().is_some()
    }

    /// Text of the visible message, if any
    pub fn message(&self) -> Option<&'static str> {
        self.current.as_ref().map(Announcement::text)
    }

    pub fn current(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }

    /// Earliest armed clear
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|clear| clear.deadline).min()
    }

    /// Time left before the next clear fires, zero if it is overdue
    pub fn time_until_clear(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Number of clears still armed
    pub fn pending_clears(&self) -> usize {
        self.pending.len()
    }

    /// Drop the message and every armed clear
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.current = None;
    }
}
