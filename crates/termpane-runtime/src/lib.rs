// ABOUTME: Controller that ties terminal size polling, redraws, and keyboard input together.
// ABOUTME: One event loop owns the pane tree; input is read on its own thread and queued.

mod controller;
mod input;
mod signal;

pub use controller::{Context, Controller, Flow, Handler, RuntimeError};
pub use input::InputLoop;
pub use signal::shutdown_signal;
