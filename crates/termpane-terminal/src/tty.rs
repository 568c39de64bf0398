// ABOUTME: Unix tty driver built on termios and the kernel window size.
// ABOUTME: Operates on /dev/tty so it works even when stdout is redirected.

use std::fs::{File, OpenOptions};
use std::io;

use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

use termpane_core::Size;

use crate::{ModeGuard, TerminalDriver, TerminalError};

/// Driver for the process's controlling terminal
#[derive(Debug)]
pub struct TtyDriver {
    tty: File,
}

impl TtyDriver {
    /// Open the controlling terminal (`/dev/tty`)
    pub fn open() -> Result<Self, TerminalError> {
        let tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .map_err(TerminalError::OpenError)?;
        Ok(Self { tty })
    }
}

impl TerminalDriver for TtyDriver {
    type Guard = TtyModeGuard;

    fn enter_raw_no_echo(&mut self) -> Result<TtyModeGuard, TerminalError> {
        let original = get_attr(&self.tty)?;

        // cbreak: keep ISIG so Ctrl-C still reaches the signal handler
        let mut raw = original.clone();
        raw.local_flags.remove(LocalFlags::ICANON | LocalFlags::ECHO);
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        set_attr(&self.tty, &raw)?;

        tracing::debug!("Terminal switched to unbuffered no-echo mode");
        Ok(TtyModeGuard {
            tty: self.tty.try_clone().map_err(TerminalError::OpenError)?,
            original,
            restored: false,
        })
    }

    fn query_size(&mut self) -> Result<Size, TerminalError> {
        let ws = rustix::termios::tcgetwinsize(&self.tty)
            .map_err(|e| TerminalError::SizeError(e.into()))?;
        if ws.ws_col == 0 || ws.ws_row == 0 {
            return Err(TerminalError::EmptySize);
        }
        Ok(Size::new(ws.ws_col, ws.ws_row))
    }
}

/// Saved termios of the controlling terminal, restored on drop
pub struct TtyModeGuard {
    tty: File,
    original: Termios,
    restored: bool,
}

impl ModeGuard for TtyModeGuard {
    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        if self.restored {
            return Ok(());
        }
        set_attr(&self.tty, &self.original)?;
        self.restored = true;
        tracing::debug!("Terminal mode restored");
        Ok(())
    }
}

impl Drop for TtyModeGuard {
    fn drop(&mut self) {
        // Best effort; nothing left to report to
        let _ = self.restore_mode();
    }
}

fn get_attr(tty: &File) -> Result<Termios, TerminalError> {
    termios::tcgetattr(tty).map_err(|e| TerminalError::GetAttrError(io::Error::from(e)))
}

fn set_attr(tty: &File, termios: &Termios) -> Result<(), TerminalError> {
    termios::tcsetattr(tty, SetArg::TCSANOW, termios)
        .map_err(|e| TerminalError::SetAttrError(io::Error::from(e)))
}
