// ABOUTME: ANSI escape sequence output sink.
// ABOUTME: Positions text by resetting the cursor to the corner and moving relative to it.

use std::io::{self, Write};

use termpane_core::Screen;

/// Move the cursor far up and far left, landing on the top-left cell
const CURSOR_ORIGIN: &[u8] = b"\x1b[1000A\x1b[1000D";
const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// [`Screen`] that encodes writes as ANSI cursor movement for a byte stream.
///
/// Every write starts from the origin: `ESC[1000A ESC[1000D`, then
/// `ESC[<x>C` and `ESC[<y>B` when non-zero, then the text itself.
#[derive(Debug)]
pub struct AnsiScreen<W: Write> {
    out: W,
}

impl<W: Write> AnsiScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl AnsiScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Screen for AnsiScreen<W> {
    fn put(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.out.write_all(CURSOR_ORIGIN)?;
        if x > 0 {
            write!(self.out, "\x1b[{}C", x)?;
        }
        if y > 0 {
            write!(self.out, "\x1b[{}B", y)?;
        }
        self.out.write_all(text.as_bytes())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN)?;
        self.out.write_all(CURSOR_ORIGIN)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
