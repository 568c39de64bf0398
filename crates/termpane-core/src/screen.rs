// ABOUTME: Output sink abstraction for absolute-position terminal writes.
// ABOUTME: Panes and borders write through this trait; the terminal crate encodes it as ANSI.

use std::io;

/// A byte-oriented terminal surface addressed in absolute cell coordinates.
///
/// Coordinates are relative to the terminal origin (top-left is `0, 0`).
/// Nothing is buffered or diffed: every call is expected to reach the
/// underlying stream, so a pane that redraws re-emits its output.
pub trait Screen {
    /// Write `text` starting at column `x`, row `y`.
    fn put(&mut self, x: u16, y: u16, text: &str) -> io::Result<()>;

    /// Erase the whole terminal and move the cursor to the origin.
    fn clear(&mut self) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn put(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        (**self).put(x, y, text)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// A single positioned write captured by [`MemoryScreen`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Put {
    pub x: u16,
    pub y: u16,
    pub text: String,
}

/// Screen that records writes instead of emitting them.
///
/// Handy for testing widgets and layouts without a terminal.
#[derive(Debug, Default)]
pub struct MemoryScreen {
    pub puts: Vec<Put>,
    pub clears: usize,
    pub flushes: usize,
}

impl MemoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written at exactly `(x, y)`, most recent first match
    pub fn text_at(&self, x: u16, y: u16) -> Option<&str> {
        self.puts
            .iter()
            .rev()
            .find(|p| p.x == x && p.y == y)
            .map(|p| p.text.as_str())
    }
}

impl Screen for MemoryScreen {
    fn put(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.puts.push(Put {
            x,
            y,
            text: text.to_string(),
        });
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.puts.clear();
        self.clears += 1;
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
