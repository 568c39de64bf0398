// ABOUTME: Terminal driver abstraction used by the controller.
// ABOUTME: Mode changes are scoped by a guard that restores the previous mode.

use termpane_core::Size;

#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("Failed to open controlling terminal: {0}")]
    OpenError(#[source] std::io::Error),

    #[error("Failed to read terminal attributes: {0}")]
    GetAttrError(#[source] std::io::Error),

    #[error("Failed to set terminal attributes: {0}")]
    SetAttrError(#[source] std::io::Error),

    #[error("Failed to query terminal size: {0}")]
    SizeError(#[source] std::io::Error),

    #[error("Terminal reported an empty size")]
    EmptySize,
}

/// Restores a terminal mode saved by [`TerminalDriver::enter_raw_no_echo`].
///
/// Implementations also restore on drop, so a guard held across a panic or
/// an early return still leaves the user's shell usable.
pub trait ModeGuard: Send {
    /// Restore the saved mode now. Calling it again is a no-op.
    fn restore_mode(&mut self) -> Result<(), TerminalError>;
}

/// Capability the controller needs from the terminal.
pub trait TerminalDriver: Send {
    type Guard: ModeGuard;

    /// Switch to unbuffered, non-echoing input. Failure here is fatal.
    fn enter_raw_no_echo(&mut self) -> Result<Self::Guard, TerminalError>;

    /// Current size in cells. Failures are expected to be transient.
    fn query_size(&mut self) -> Result<Size, TerminalError>;
}
