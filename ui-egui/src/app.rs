// SPDX-License-Identifier: MIT OR Apache-2.0

//! The board view: owns the board state and draws the whole screen.

use std::time::{Duration, Instant};

use egui::{RichText, ScrollArea};
use gift_board_core::{BoardState, Direction, Team, Toggle};
use tracing::{debug, info};

use crate::components::{RotationControls, StatsPanel, TeamGridRenderer};
use crate::design_system::{card, get_design_system, TextStyle};
use crate::hit_areas::HitArea;
use crate::msg::UiAction;
use crate::rotation_banner::RotationBanner;
use crate::ui_config::UiConfig;

pub const BOARD_TITLE: &str = "🎄 Jeu de Noël 🎅";

/// Main application state
pub struct BoardView {
    /// Taken sets, turn and rotation banner
    board: BoardState,
    config: UiConfig,
    /// Show developer overlay (F12)
    show_overlay: bool,
}

impl BoardView {
    /// Mount a fresh board
    pub fn new(config: UiConfig) -> Self {
        let board = BoardState::with_policy(config.rotation.clear_policy);
        info!(policy = ?config.rotation.clear_policy, "Board mounted");
        Self {
            board,
            config,
            show_overlay: false,
        }
    }

    pub fn with_overlay(mut self, show: bool) -> Self {
        self.show_overlay = show;
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn overlay_visible(&self) -> bool {
        self.show_overlay
    }

    /// Apply one player action to the board
    pub fn apply(&mut self, action: UiAction, now: Instant) {
        match action {
            UiAction::ToggleGift { team, number } => {
                if self.board.toggle(team, number) == Toggle::Taken {
                    debug!(%team, number = number.get(), "Gift taken");
                }
            }
            UiAction::Rotate(direction) => self.board.announce_rotation(direction, now),
            UiAction::ToggleOverlay => {
                self.show_overlay = !self.show_overlay;
                debug!("Debug overlay toggled: {}", self.show_overlay);
            }
        }
    }

    /// Run one frame at the current time
    pub fn show(&mut self, ctx: &egui::Context) {
        self.frame(ctx, Instant::now());
    }

    /// Run one frame as if the clock read `now`
    pub fn frame(&mut self, ctx: &egui::Context, now: Instant) {
        get_design_system().apply_to_context(ctx, self.config.window.background_color.into());

        if self.board.tick(now) {
            debug!("Rotation message cleared");
        }

        let mut actions = Self::keyboard_actions(ctx);
        self.render_board(ctx, now, &mut actions);
        self.render_debug_overlay(ctx, now);

        let changed = !actions.is_empty();
        for action in actions {
            self.apply(action, now);
        }
        if changed {
            ctx.request_repaint();
        }

        self.schedule_repaint(ctx, now);
    }

    fn keyboard_actions(ctx: &egui::Context) -> Vec<UiAction> {
        ctx.input(|i| {
            let mut actions = Vec::new();
            if i.key_pressed(egui::Key::ArrowLeft) {
                actions.push(UiAction::Rotate(Direction::Left));
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                actions.push(UiAction::Rotate(Direction::Right));
            }
            if i.key_pressed(egui::Key::F12) {
                actions.push(UiAction::ToggleOverlay);
            }
            actions
        })
    }

    fn render_board(&self, ctx: &egui::Context, now: Instant, actions: &mut Vec<UiAction>) {
        let ds = get_design_system();
        let board = &self.board;
        let config = &self.config;
        let panel_frame = egui::Frame::none()
            .fill(config.window.background_color.into())
            .inner_margin(config.window.padding);

        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("✨ {} ✨", BOARD_TITLE))
                            .font(ds.font_id(TextStyle::Title))
                            .strong()
                            .color(ds.colors.gold),
                    );
                });
                ui.add_space(ds.spacing.sm);

                let fade = Duration::from_millis(config.rotation.fade_ms);
                RotationBanner::show(ui, board, now, fade);
                ui.add_space(ds.spacing.sm);

                actions.extend(RotationControls::render(ui));
                ui.add_space(ds.spacing.lg);

                for pair in Team::ALL.chunks(2) {
                    ui.columns(pair.len(), |columns| {
                        for (column, team) in columns.iter_mut().zip(pair) {
                            let [r, g, b] = team.primary();
                            card(column, egui::Color32::from_rgb(r, g, b), |ui| {
                                ui.vertical_centered(|ui| {
                                    actions.extend(TeamGridRenderer::render(
                                        ui,
                                        *team,
                                        board.taken(*team),
                                        &config.grid,
                                    ));
                                });
                            });
                        }
                    });
                    ui.add_space(ds.spacing.md);
                }

                StatsPanel::render(ui, board);
            });
        });
    }

    fn render_debug_overlay(&self, ctx: &egui::Context, now: Instant) {
        if !self.show_overlay {
            return;
        }

        egui::Window::new("Debug Overlay")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-10.0, 10.0))
            .show(ctx, |ui| {
                let rotation = self.board.rotation();
                ui.label(format!("Turn: {}", self.board.current_turn()));
                ui.label(format!("Clear policy: {:?}", rotation.policy()));
                ui.label(format!("Armed clears: {}", rotation.pending_clears()));
                match self.board.announcement() {
                    Some(shown) => ui.label(format!(
                        "Banner: {:?}, shown {} ms ago",
                        shown.direction,
                        now.saturating_duration_since(shown.shown_at).as_millis()
                    )),
                    None => ui.label("Banner: -"),
                };
                match self.board.time_until_clear(now) {
                    Some(left) => ui.label(format!("Next clear in: {} ms", left.as_millis())),
                    None => ui.label("Next clear in: -"),
                };
                ui.separator();
                for team in Team::ALL {
                    ui.label(format!("{}: {} taken", team, self.board.taken(team).len()));
                }
            });

        let painter = ctx.debug_painter();
        for area in HitArea::ALL {
            if let Some(rect) = area.rect(ctx) {
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, egui::Color32::YELLOW));
            }
        }
    }

    /// Wake up for the banner fade and for the next armed clear
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let fade = Duration::from_millis(self.config.rotation.fade_ms);
        match self.board.time_until_clear(now) {
            Some(left) if left <= fade => ctx.request_repaint(),
            Some(left) => ctx.request_repaint_after(left - fade),
            None => {}
        }
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}

impl eframe::App for BoardView {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl Drop for BoardView {
    fn drop(&mut self) {
        self.board.unmount();
    }
}
