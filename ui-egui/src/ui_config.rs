// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration for the gift board
//!
//! Everything here is cosmetic apart from [`RotationConfig::clear_policy`],
//! which decides how repeated rotation presses treat the armed clear.
//! Team names and colors are fixed and live in `gift_board_core`.

use std::path::Path;

use anyhow::{Context, Result};
use egui::Color32;
use gift_board_core::color_constants::taken_rgb;
use gift_board_core::ClearPolicy;
use serde::{Deserialize, Serialize};

/// Complete UI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub rotation: RotationConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    /// Minimum window size
    pub min_size: (f32, f32),
    /// Outer padding around the board
    pub padding: f32,
    pub background_color: SerializableColor,
}

/// Gift grid configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Edge length of a gift box in pixels
    pub cell_size: f32,
    /// Gap between boxes
    pub cell_spacing: f32,
    pub corner_radius: f32,
    /// Gradient start for taken boxes
    pub taken_color: SerializableColor,
    /// Gradient end for taken boxes
    pub taken_color_dark: SerializableColor,
    pub number_font_size: f32,
    pub marker_font_size: f32,
}

/// Rotation banner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub clear_policy: ClearPolicy,
    /// Fade-out at the end of the banner's life, in milliseconds
    pub fade_ms: u64,
}

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl From<[u8; 3]> for SerializableColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Jeu de Noël".to_string(),
            initial_size: (1000.0, 900.0),
            min_size: (640.0, 600.0),
            padding: 16.0,
            background_color: Color32::from_rgb(15, 23, 42).into(), // Night blue
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 44.0,
            cell_spacing: 6.0,
            corner_radius: 8.0,
            taken_color: taken_rgb::LIGHT.into(),
            taken_color_dark: taken_rgb::DARK.into(),
            number_font_size: 18.0,
            marker_font_size: 22.0,
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            clear_policy: ClearPolicy::Reschedule,
            fade_ms: 500,
        }
    }
}

impl UiConfig {
    /// Load config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.rotation.clear_policy, ClearPolicy::Reschedule);
        assert_eq!(config.rotation.fade_ms, 500);
        assert_eq!(config.window.title, "Jeu de Noël");
    }

    #[test]
    fn test_color_conversion() {
        let egui_color = Color32::from_rgb(100, 150, 200);
        let ser_color: SerializableColor = egui_color.into();
        let back_color: Color32 = ser_color.into();
        assert_eq!(egui_color, back_color);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: UiConfig =
            serde_json::from_str(r#"{ "rotation": { "clear_policy": "stacked" } }"#).unwrap();
        assert_eq!(config.rotation.clear_policy, ClearPolicy::Stacked);
        assert_eq!(config.rotation.fade_ms, 500);
        assert_eq!(config.grid.cell_size, 44.0);
    }
}
