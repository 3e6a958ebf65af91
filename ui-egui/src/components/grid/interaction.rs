//! Gift grid interaction handling

use egui::{CursorIcon, Rect, Sense, Ui};
use gift_board_core::{GridCell, Team};

use crate::hit_areas::HitArea;
use crate::msg::UiAction;

/// Click and hover handling for one team grid
pub struct GridInteraction {
    team: Team,
    cell_size: f32,
    spacing: f32,
}

impl GridInteraction {
    pub fn new(team: Team, cell_size: f32, spacing: f32) -> Self {
        Self {
            team,
            cell_size,
            spacing,
        }
    }

    /// Allocate the grid area and report the hovered cell and any click
    pub fn handle(&self, ui: &mut Ui, cells: &[GridCell]) -> (Rect, Option<usize>, Option<UiAction>) {
        let size = super::grid_size(self.cell_size, self.spacing);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        HitArea::Grid(self.team).remember(ui.ctx(), rect);

        let hovered = response
            .hover_pos()
            .and_then(|pos| super::pos_to_index(pos, rect, self.cell_size, self.spacing))
            .filter(|index| *index < cells.len());

        if hovered.is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        let mut action = None;
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(cell) = super::pos_to_index(pos, rect, self.cell_size, self.spacing)
                    .and_then(|index| cells.get(index))
                {
                    action = Some(UiAction::ToggleGift {
                        team: cell.team,
                        number: cell.number,
                    });
                }
            }
        }

        (rect, hovered, action)
    }
}
