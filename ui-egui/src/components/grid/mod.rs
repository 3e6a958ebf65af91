//! Team grid components

mod interaction;
mod renderer;

pub use interaction::GridInteraction;
pub use renderer::TeamGridRenderer;

use egui::{Pos2, Rect, Vec2};
use gift_board_core::{GIFTS_PER_TEAM, GRID_COLUMNS};

/// Rows in a team grid
pub const GRID_ROWS: usize = GIFTS_PER_TEAM / GRID_COLUMNS;

/// Pixel size of a whole grid
pub fn grid_size(cell_size: f32, spacing: f32) -> Vec2 {
    let span = |n: usize| n as f32 * cell_size + (n as f32 - 1.0) * spacing;
    Vec2::new(span(GRID_COLUMNS), span(GRID_ROWS))
}

/// Screen rect of the cell at `index` (reading order)
pub fn cell_rect(index: usize, grid_rect: Rect, cell_size: f32, spacing: f32) -> Rect {
    let col = (index % GRID_COLUMNS) as f32;
    let row = (index / GRID_COLUMNS) as f32;
    let min = grid_rect.min + Vec2::new(col, row) * (cell_size + spacing);
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

/// Index of the cell under `pos`, `None` outside the grid or in a gap
pub fn pos_to_index(pos: Pos2, grid_rect: Rect, cell_size: f32, spacing: f32) -> Option<usize> {
    if !grid_rect.contains(pos) {
        return None;
    }

    let rel = pos - grid_rect.min;
    let pitch = cell_size + spacing;
    let col = (rel.x / pitch).floor() as usize;
    let row = (rel.y / pitch).floor() as usize;

    // Gaps between boxes are not clickable
    if rel.x - col as f32 * pitch > cell_size || rel.y - row as f32 * pitch > cell_size {
        return None;
    }

    if col < GRID_COLUMNS && row < GRID_ROWS {
        Some(row * GRID_COLUMNS + col)
    } else {
        None
    }
}

/// Largest square inside a box whose corners are rounded by `corner_radius`
pub fn gradient_rect(rect: Rect, corner_radius: f32) -> Rect {
    let radius = corner_radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    rect.shrink(radius * (1.0 - std::f32::consts::FRAC_1_SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_rect() -> Rect {
        Rect::from_min_size(Pos2::new(10.0, 20.0), grid_size(40.0, 5.0))
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(grid_size(40.0, 5.0), Vec2::new(175.0, 220.0));
    }

    #[test]
    fn test_cell_rect_and_hit_test_agree() {
        let rect = grid_rect();
        for index in 0..GIFTS_PER_TEAM {
            let cell = cell_rect(index, rect, 40.0, 5.0);
            assert_eq!(pos_to_index(cell.center(), rect, 40.0, 5.0), Some(index));
        }
    }

    #[test]
    fn test_gaps_and_outside_miss() {
        let rect = grid_rect();
        // Horizontal gap between first and second cell
        assert_eq!(pos_to_index(Pos2::new(52.5, 30.0), rect, 40.0, 5.0), None);
        assert_eq!(pos_to_index(Pos2::new(0.0, 0.0), rect, 40.0, 5.0), None);
    }

    #[test]
    fn test_gradient_stays_inside_rounded_corners() {
        let cell = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(44.0));
        for radius in [0.0, 8.0, 22.0, 100.0] {
            let inner = gradient_rect(cell, radius);
            assert!(cell.contains_rect(inner));

            let r = radius.min(22.0);
            let arc_center = cell.left_top() + Vec2::splat(r);
            assert!(inner.left_top().distance(arc_center) <= r + 1e-3, "radius {}", radius);
        }
        assert_eq!(gradient_rect(cell, 0.0), cell);
    }
}
