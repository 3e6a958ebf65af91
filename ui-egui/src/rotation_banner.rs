// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rotation banner shown under the title while a message is live

use std::time::{Duration, Instant};

use egui::{Align, Layout, RichText, Rounding, Ui};
use gift_board_core::BoardState;

use crate::design_system::{get_design_system, TextStyle};

/// Opacity of the banner: 1.0 while fresh, fading to 0.0 over the
/// last `fade` before its clear fires
pub fn banner_opacity(remaining: Duration, fade: Duration) -> f32 {
    if fade.is_zero() || remaining >= fade {
        return 1.0;
    }
    (remaining.as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
}

/// Draws the live rotation message, if any
pub struct RotationBanner;

impl RotationBanner {
    pub fn show(ui: &mut Ui, board: &BoardState, now: Instant, fade: Duration) {
        let Some(message) = board.rotation_message() else {
            return;
        };
        let ds = get_design_system();
        let remaining = board.time_until_clear(now).unwrap_or_default();
        let opacity = banner_opacity(remaining, fade);

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            egui::Frame::none()
                .fill(ds.colors.banner_bg.gamma_multiply(opacity))
                .inner_margin(ds.spacing.sm)
                .rounding(Rounding::same(20.0))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(message)
                            .font(ds.font_id(TextStyle::Heading))
                            .strong()
                            .color(ds.colors.banner_text.gamma_multiply(opacity)),
                    );
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_opacity() {
        let fade = Duration::from_millis(500);
        assert_eq!(banner_opacity(Duration::from_millis(2000), fade), 1.0);
        assert_eq!(banner_opacity(Duration::from_millis(500), fade), 1.0);
        assert!((banner_opacity(Duration::from_millis(250), fade) - 0.5).abs() < 1e-6);
        assert_eq!(banner_opacity(Duration::ZERO, fade), 0.0);
        assert_eq!(banner_opacity(Duration::ZERO, Duration::ZERO), 1.0);
    }
}
