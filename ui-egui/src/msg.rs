// SPDX-License-Identifier: MIT OR Apache-2.0

//! Actions produced by the components and applied by the board view.

use gift_board_core::{Direction, GiftNumber, Team};

/// Something the player asked for during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// A gift box was clicked
    ToggleGift { team: Team, number: GiftNumber },
    /// One of the rotation buttons (or arrow keys) was pressed
    Rotate(Direction),
    /// F12: show or hide the developer overlay
    ToggleOverlay,
}
