// SPDX-License-Identifier: MIT OR Apache-2.0

//! Main entry point for the gift board

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gift_board_core::ClearPolicy;
use gift_board_ui_egui::{logging, BoardView, UiConfig};

#[derive(Parser)]
#[command(name = "gift-board")]
#[command(about = "Four-team Christmas gift board")]
struct Args {
    #[arg(long, help = "Load UI settings from a JSON file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Keep every rotation clear armed instead of rescheduling")]
    stacked_timers: bool,

    #[arg(long, help = "Start with the developer overlay visible")]
    debug: bool,

    #[arg(long, help = "Log to stderr instead of the rotating log file")]
    log_stderr: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Keep the logger alive until the window closes
    let _logging = match logging::init_logging(args.log_stderr) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };
    logging::install_panic_hook();

    let mut config = match &args.config {
        Some(path) => UiConfig::load_from_file(path)?,
        None => UiConfig::default(),
    };
    if args.stacked_timers {
        config.rotation.clear_policy = ClearPolicy::Stacked;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        policy = ?config.rotation.clear_policy,
        "Starting gift board"
    );

    let (width, height) = config.window.initial_size;
    let (min_width, min_height) = config.window.min_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([width, height])
            .with_min_inner_size([min_width, min_height]),
        centered: true,
        ..Default::default()
    };

    let title = config.window.title.clone();
    let debug = args.debug;
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(BoardView::new(config).with_overlay(debug))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))
}
