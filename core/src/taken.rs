// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-team set of taken gift boxes

use crate::GiftNumber;

/// Set of gift numbers a team has already handed out.
///
/// Backed by a bit mask indexed by the gift number, so membership,
/// insertion and removal are constant time and idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TakenSet {
    bits: u32,
}

impl TakenSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    fn bit(number: GiftNumber) -> u32 {
        1 << number.get()
    }

    /// Check whether a box has been taken
    pub fn contains(&self, number: GiftNumber) -> bool {
        self.bits & Self::bit(number) != 0
    }

    /// Mark a box as taken, returns false if it already was
    pub fn insert(&mut self, number: GiftNumber) -> bool {
        let was_taken = self.contains(number);
        self.bits |= Self::bit(number);
        !was_taken
    }

    /// Mark a box as available again, returns false if it was not taken
    pub fn remove(&mut self, number: GiftNumber) -> bool {
        let was_taken = self.contains(number);
        self.bits &= !Self::bit(number);
        was_taken
    }

    /// Number of taken boxes
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Taken boxes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = GiftNumber> + '_ {
        GiftNumber::all().filter(move |n| self.contains(*n))
    }
}

impl FromIterator<GiftNumber> for TakenSet {
    fn from_iter<I: IntoIterator<Item = GiftNumber>>(iter: I) -> Self {
        let mut set = TakenSet::new();
        for number in iter {
            set.insert(number);
        }
        set
    }
}
