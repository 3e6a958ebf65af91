// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging setup for the gift board binary
//!
//! Library code logs through `tracing`. By default those events are forwarded
//! to the `log` facade and written to rotating files by `flexi_logger`;
//! `--log-stderr` installs a `tracing-subscriber` formatter instead.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use tracing_subscriber::EnvFilter;

/// Keeps the active logger alive for the lifetime of the program
pub enum LoggingGuard {
    File(LoggerHandle),
    Stderr,
}

/// Directory holding the rotated log files
pub fn log_dir() -> Result<PathBuf> {
    let path = match std::env::consts::OS {
        "macos" => {
            let mut path = PathBuf::from(std::env::var("HOME")?);
            path.push("Library");
            path.push("Logs");
            path.push("gift-board");
            path
        }
        _ => PathBuf::from("logs"),
    };
    Ok(path)
}

/// Initialize logging, either to rotating files or to stderr
pub fn init_logging(to_stderr: bool) -> Result<LoggingGuard> {
    if to_stderr {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;
        return Ok(LoggingGuard::Stderr);
    }

    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)?;

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(&dir)
                .basename("gift-board")
                .suffix("log"),
        )
        .rotate(
            Criterion::Size(10 * 1024 * 1024), // 10MB per file
            Naming::Timestamps,
            Cleanup::KeepLogFiles(5),
        )
        .start()?;

    Ok(LoggingGuard::File(handle))
}

/// Log panics before handing over to the default hook
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(
            thread = ?std::thread::current().name(),
            "UI panic: {}",
            panic_info
        );
        default_hook(panic_info);
    }));
}
