// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(clippy::all)]

//! Gift board egui front-end

pub mod app;
pub mod components;
pub mod design_system;
pub mod hit_areas;
pub mod logging;
pub mod msg;
pub mod rotation_banner;
pub mod ui_config;

pub use app::BoardView;
pub use hit_areas::HitArea;
pub use msg::UiAction;
pub use ui_config::UiConfig;
