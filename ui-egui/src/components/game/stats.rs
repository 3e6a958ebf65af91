//! Stats panel: boxes collected per team

use egui::{Align, Color32, Layout, RichText, Ui};
use gift_board_core::{team_stats, BoardState};

use crate::design_system::{card, get_design_system, TextStyle};

pub const STATS_TITLE: &str = "🎁 Cadeaux récupérés 🎁";

/// Stats panel component
pub struct StatsPanel;

impl StatsPanel {
    pub fn render(ui: &mut Ui, board: &BoardState) {
        let ds = get_design_system();
        let stats = team_stats(board);

        card(ui, ds.colors.border, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(STATS_TITLE)
                        .font(ds.font_id(TextStyle::Heading))
                        .strong(),
                );
            });
            ui.add_space(ds.spacing.sm);

            ui.columns(stats.len(), |columns| {
                for (column, stat) in columns.iter_mut().zip(stats.iter()) {
                    let [r, g, b] = stat.color();
                    column.with_layout(Layout::top_down(Align::Center), |ui| {
                        ui.label(
                            RichText::new(stat.taken.to_string())
                                .font(ds.font_id(TextStyle::Stat))
                                .strong()
                                .color(Color32::from_rgb(r, g, b)),
                        );
                        ui.label(
                            RichText::new(stat.name())
                                .font(ds.font_id(TextStyle::Small))
                                .color(ds.colors.text_secondary),
                        );
                    });
                }
            });
        });
    }
}
