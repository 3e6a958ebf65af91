// SPDX-License-Identifier: MIT OR Apache-2.0

//! Screen rectangles of the clickable regions, as laid out in the last frame
//!
//! Kept in egui's temporary data so the developer overlay can outline them
//! and pointer-driven tests can aim at them.

use egui::{Context, Id, Rect};
use gift_board_core::{Direction, Team};

/// A region of the board that reacts to clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitArea {
    Grid(Team),
    Rotate(Direction),
}

impl HitArea {
    pub const ALL: [HitArea; 6] = [
        HitArea::Rotate(Direction::Left),
        HitArea::Rotate(Direction::Right),
        HitArea::Grid(Team::Vert),
        HitArea::Grid(Team::Bleu),
        HitArea::Grid(Team::Rouge),
        HitArea::Grid(Team::Orange),
    ];

    fn id(self) -> Id {
        Id::new(("gift_board_hit_area", self))
    }

    pub fn remember(self, ctx: &Context, rect: Rect) {
        ctx.data_mut(|data| data.insert_temp(self.id(), rect));
    }

    /// Where this area was drawn last, `None` before the first frame
    pub fn rect(self, ctx: &Context) -> Option<Rect> {
        ctx.data(|data| data.get_temp(self.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Pos2, Vec2};

    #[test]
    fn test_areas_are_kept_apart() {
        let ctx = Context::default();
        let grid = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(50.0));
        let button = Rect::from_min_size(Pos2::ZERO, Vec2::new(220.0, 44.0));

        assert_eq!(HitArea::Grid(Team::Rouge).rect(&ctx), None);
        HitArea::Grid(Team::Rouge).remember(&ctx, grid);
        HitArea::Rotate(Direction::Left).remember(&ctx, button);

        assert_eq!(HitArea::Grid(Team::Rouge).rect(&ctx), Some(grid));
        assert_eq!(HitArea::Rotate(Direction::Left).rect(&ctx), Some(button));
        assert_eq!(HitArea::Grid(Team::Vert).rect(&ctx), None);
    }
}
