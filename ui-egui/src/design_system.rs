// SPDX-License-Identifier: MIT OR Apache-2.0

//! Design system for the gift board
//!
//! Shared colors, font sizes and spacing so the grids, the banner and the
//! stats panel look like one screen.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Ui, Vec2};

/// Core colors - festive night theme
pub struct BoardColors {
    /// Panel/card background
    pub surface: Color32,
    /// Card border
    pub border: Color32,
    /// Title and heading text
    pub text_primary: Color32,
    /// Labels under the stats
    pub text_secondary: Color32,
    /// Digits on available gift boxes
    pub gift_text: Color32,
    /// Rotation banner background
    pub banner_bg: Color32,
    /// Rotation banner text
    pub banner_text: Color32,
    /// Rotate-left button
    pub rotate_left: Color32,
    /// Rotate-right button
    pub rotate_right: Color32,
    /// Sparkles around the title
    pub gold: Color32,
}

impl Default for BoardColors {
    fn default() -> Self {
        Self {
            surface: Color32::from_rgb(30, 41, 59),
            border: Color32::from_rgb(71, 85, 105),
            text_primary: Color32::from_rgb(248, 250, 252),
            text_secondary: Color32::from_rgb(203, 213, 225),
            gift_text: Color32::WHITE,
            banner_bg: Color32::from_rgb(220, 38, 38), // Santa red
            banner_text: Color32::WHITE,
            rotate_left: Color32::from_rgb(22, 163, 74),
            rotate_right: Color32::from_rgb(37, 99, 235),
            gold: Color32::from_rgb(250, 204, 21),
        }
    }
}

/// Typography sizes
pub struct BoardTypography {
    pub font_size_small: f32,
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_title: f32,
    pub font_size_stat: f32,
}

impl Default for BoardTypography {
    fn default() -> Self {
        Self {
            font_size_small: 13.0,
            font_size_body: 16.0,
            font_size_heading: 20.0,
            font_size_title: 32.0,
            font_size_stat: 36.0,
        }
    }
}

/// Spacing system
pub struct BoardSpacing {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
}

impl Default for BoardSpacing {
    fn default() -> Self {
        let unit = 16.0;
        Self {
            sm: unit * 0.5,
            md: unit,
            lg: unit * 1.5,
        }
    }
}

/// The main design system
#[derive(Default)]
pub struct BoardDesignSystem {
    pub colors: BoardColors,
    pub typography: BoardTypography,
    pub spacing: BoardSpacing,
}

/// Text style variants
pub enum TextStyle {
    Small,
    Body,
    Heading,
    Title,
    Stat,
}

impl BoardDesignSystem {
    /// Get font ID for different text styles
    pub fn font_id(&self, style: TextStyle) -> FontId {
        let size = match style {
            TextStyle::Small => self.typography.font_size_small,
            TextStyle::Body => self.typography.font_size_body,
            TextStyle::Heading => self.typography.font_size_heading,
            TextStyle::Title => self.typography.font_size_title,
            TextStyle::Stat => self.typography.font_size_stat,
        };
        FontId::new(size, FontFamily::Proportional)
    }

    /// Apply the design system to egui context
    pub fn apply_to_context(&self, ctx: &egui::Context, background: Color32) {
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = background;
        style.visuals.window_fill = self.colors.surface;
        style.visuals.override_text_color = Some(self.colors.text_primary);
        style.visuals.window_rounding = Rounding::same(12.0);

        style.spacing.item_spacing = Vec2::new(self.spacing.sm, self.spacing.sm);
        style.spacing.button_padding = Vec2::new(self.spacing.md, self.spacing.sm);

        ctx.set_style(style);
    }
}

/// Global design system instance
pub fn get_design_system() -> &'static BoardDesignSystem {
    static DESIGN_SYSTEM: std::sync::OnceLock<BoardDesignSystem> = std::sync::OnceLock::new();
    DESIGN_SYSTEM.get_or_init(BoardDesignSystem::default)
}

/// Rounded card used for each team and the stats panel
pub fn card(ui: &mut Ui, border: Color32, content: impl FnOnce(&mut Ui)) {
    let ds = get_design_system();

    egui::Frame::none()
        .fill(ds.colors.surface)
        .stroke(Stroke::new(2.0, border))
        .inner_margin(ds.spacing.md)
        .rounding(Rounding::same(12.0))
        .show(ui, content);
}
