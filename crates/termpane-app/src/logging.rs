// ABOUTME: tracing-subscriber setup for the demo binary.
// ABOUTME: Logs go to a file because the terminal is occupied by the pane UI.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use termpane_core::Config;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "TERMPANE_LOG";

/// Install the global subscriber, returning the file it writes to.
pub fn init(config: &Config) -> Result<PathBuf> {
    let path = config.log_path().context("No log file location available")?;
    let file = open_log(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("Failed to install log subscriber")?;
    Ok(path)
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
