// ABOUTME: Pane-scoped drawing surface handed to widgets and the border renderer.
// ABOUTME: Translates pane-relative coordinates into absolute screen positions.

use std::io;

use termpane_core::{Screen, Style};

/// Rectangle in absolute terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Drawing surface for one pane.
///
/// `write` addresses the content area, which starts inside the pane's
/// left/top border. `write_raw` addresses the whole pane including its
/// border cells. Writes are not clipped.
pub struct Canvas<'a> {
    screen: &'a mut dyn Screen,
    rect: Rect,
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

impl<'a> Canvas<'a> {
    pub fn new(screen: &'a mut dyn Screen, rect: Rect, style: Option<&Style>) -> Self {
        let (left, right, top, bottom) = match style {
            Some(s) => (s.left(), s.right(), s.top(), s.bottom()),
            None => (0, 0, 0, 0),
        };
        Self {
            screen,
            rect,
            left,
            right,
            top,
            bottom,
        }
    }

    /// Whole pane area, border included
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> u16 {
        self.rect.width
    }

    pub fn height(&self) -> u16 {
        self.rect.height
    }

    /// Columns available inside the border
    pub fn content_width(&self) -> u16 {
        self.rect.width.saturating_sub(self.left + self.right)
    }

    /// Rows available inside the border
    pub fn content_height(&self) -> u16 {
        self.rect.height.saturating_sub(self.top + self.bottom)
    }

    /// Write inside the content area
    pub fn write(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.write_raw(x.saturating_add(self.left), y.saturating_add(self.top), text)
    }

    /// Write relative to the pane origin, ignoring the border inset
    pub fn write_raw(&mut self, x: u16, y: u16, text: &str) -> io::Result<()> {
        self.screen.put(
            self.rect.x.saturating_add(x),
            self.rect.y.saturating_add(y),
            text,
        )
    }
}
