// ABOUTME: Main application entry point.
// ABOUTME: Loads config, sets up file logging, builds the layout, and runs the controller.

mod clock;
mod demo;
mod logging;

use anyhow::{Context, Result};

use termpane_core::Config;
use termpane_runtime::Controller;
use termpane_terminal::{AnsiScreen, FdKeys, TtyDriver};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load_or_default();
    // Without a log file the demo runs silently
    let log_path = logging::init(&config).ok();

    tracing::info!("Starting termpane-demo");
    if let Some(path) = &log_path {
        tracing::debug!("Logging to {}", path.display());
    }

    let spec = config.layout.clone().unwrap_or_else(demo::sample_layout);
    let root = termpane_layout::build(&spec, demo::resolve_widget)
        .context("Failed to build pane layout")?;

    let driver = TtyDriver::open().context("Failed to open terminal")?;
    let keys = FdKeys::stdin().context("Failed to open standard input")?;
    let mut controller = Controller::new(driver, AnsiScreen::stdout(), root)
        .with_tick(config.tick())
        .with_handler(demo::QuitKey::new(demo::QUIT_KEY));

    controller
        .run(keys)
        .await
        .context("Terminal UI stopped with an error")?;

    tracing::info!("Exiting termpane-demo");
    Ok(())
}
