//! Rotation buttons

use egui::{Button, Color32, RichText, Rounding, Ui, Vec2};
use gift_board_core::Direction;

use crate::design_system::{get_design_system, TextStyle};
use crate::hit_areas::HitArea;
use crate::msg::UiAction;

const BUTTON_SIZE: Vec2 = Vec2::new(220.0, 44.0);

/// "Tourner à gauche" / "Tourner à droite" buttons
pub struct RotationControls;

impl RotationControls {
    /// Label of the button for `direction`
    pub fn label(direction: Direction) -> &'static str {
        match direction {
            Direction::Left => "⬅️ Tourner à gauche",
            Direction::Right => "Tourner à droite ➡️",
        }
    }

    /// Render both buttons centered on one row
    pub fn render(ui: &mut Ui) -> Option<UiAction> {
        let ds = get_design_system();
        let mut action = None;

        let total = BUTTON_SIZE.x * 2.0 + ui.spacing().item_spacing.x;
        let offset = ((ui.available_width() - total) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(offset);
            for (direction, fill) in [
                (Direction::Left, ds.colors.rotate_left),
                (Direction::Right, ds.colors.rotate_right),
            ] {
                let response = Self::button(ui, Self::label(direction), fill);
                HitArea::Rotate(direction).remember(ui.ctx(), response.rect);
                if response.clicked() {
                    action = Some(UiAction::Rotate(direction));
                }
            }
        });

        action
    }

    fn button(ui: &mut Ui, text: &str, fill: Color32) -> egui::Response {
        let ds = get_design_system();
        let button = Button::new(
            RichText::new(text)
                .font(ds.font_id(TextStyle::Body))
                .strong()
                .color(Color32::WHITE),
        )
        .fill(fill)
        .rounding(Rounding::same(22.0))
        .min_size(BUTTON_SIZE);

        ui.add(button)
    }
}
