// ABOUTME: Terminal mode control, keyboard input, and output encoding.
// ABOUTME: Puts the tty into unbuffered no-echo mode, reads its size and keys, and writes ANSI positioning.

pub mod ansi;
pub mod driver;
pub mod keys;
#[cfg(unix)]
pub mod tty;

pub use ansi::AnsiScreen;
pub use driver::{ModeGuard, TerminalDriver, TerminalError};
#[cfg(unix)]
pub use keys::FdKeys;
pub use keys::{KeyRead, KeySource};
#[cfg(unix)]
pub use tty::{TtyDriver, TtyModeGuard};
