//! Gift grid rendering

use egui::{Align2, Color32, FontFamily, FontId, Mesh, Rect, RichText, Rounding, Shape, Stroke, Ui};
use gift_board_core::color_constants::linear_gradient;
use gift_board_core::{grid_cells, GridCell, TakenSet, Team};

use super::GridInteraction;
use crate::design_system::{get_design_system, TextStyle};
use crate::msg::UiAction;
use crate::ui_config::GridConfig;

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Draws one team's header and gift grid
pub struct TeamGridRenderer;

impl TeamGridRenderer {
    /// Render the team and return the click, if any
    pub fn render(ui: &mut Ui, team: Team, taken: &TakenSet, config: &GridConfig) -> Option<UiAction> {
        let cells = grid_cells(team, taken);

        Self::render_header(ui, team);
        ui.add_space(get_design_system().spacing.sm);

        let interaction = GridInteraction::new(team, config.cell_size, config.cell_spacing);
        let (rect, hovered, action) = interaction.handle(ui, &cells);

        let painter = ui.painter_at(rect);
        for (index, cell) in cells.iter().enumerate() {
            let cell_rect = super::cell_rect(index, rect, config.cell_size, config.cell_spacing);
            Self::render_cell(&painter, cell_rect, cell, config, hovered == Some(index));
        }

        action
    }

    fn render_header(ui: &mut Ui, team: Team) {
        let ds = get_design_system();
        ui.horizontal(|ui| {
            ui.label(RichText::new("🎁").font(ds.font_id(TextStyle::Heading)));
            ui.label(
                RichText::new(format!("Lot {}", team.name()))
                    .font(ds.font_id(TextStyle::Heading))
                    .strong()
                    .color(rgb(team.accent())),
            );
            ui.label(RichText::new("⭐").font(ds.font_id(TextStyle::Heading)));
        });
    }

    /// Paint a single gift box
    fn render_cell(painter: &egui::Painter, rect: Rect, cell: &GridCell, config: &GridConfig, hovered: bool) {
        let ds = get_design_system();
        let (from, to): (Color32, Color32) = if cell.taken {
            (config.taken_color.into(), config.taken_color_dark.into())
        } else {
            (rgb(cell.team.primary()), rgb(cell.team.accent()))
        };

        Self::paint_gradient(painter, rect, config.corner_radius, from, to);

        let outline = if hovered { ds.colors.gift_text } else { to };
        painter.rect_stroke(rect, Rounding::same(config.corner_radius), Stroke::new(2.0, outline));

        let size = if cell.taken {
            config.marker_font_size
        } else {
            config.number_font_size
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            cell.label(),
            FontId::new(size, FontFamily::Proportional),
            ds.colors.gift_text,
        );
    }

    /// 135° gradient: `from` in the top-left corner, `to` in the bottom-right.
    ///
    /// The mesh is square, so it sits inside a rounded fill of the middle
    /// color to keep the corners within the outline.
    fn paint_gradient(painter: &egui::Painter, rect: Rect, corner_radius: f32, from: Color32, to: Color32) {
        let mid = linear_gradient([from.r(), from.g(), from.b()], [to.r(), to.g(), to.b()], 0.5);
        let mid = rgb(mid);
        painter.rect_filled(rect, Rounding::same(corner_radius), mid);

        let rect = super::gradient_rect(rect, corner_radius);
        let mut mesh = Mesh::default();
        mesh.colored_vertex(rect.left_top(), from);
        mesh.colored_vertex(rect.right_top(), mid);
        mesh.colored_vertex(rect.right_bottom(), to);
        mesh.colored_vertex(rect.left_bottom(), mid);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(Shape::mesh(mesh));
    }
}
