// ABOUTME: Contract for content rendered inside leaf panes.
// ABOUTME: Widgets declare a minimum size on attach and redraw on every tick.

use std::io;

use crate::{Canvas, Pane};

/// Content of a leaf pane.
///
/// `init` runs once when the widget is attached and is where it declares
/// the minimum content size it needs (`Pane::set_min_size`). `draw` runs
/// after the pane's border on startup and after every resize, `iterate`
/// runs on every render tick. Both default to `render`.
pub trait Widget: Send {
    fn init(&mut self, _pane: &mut Pane) {}

    fn render(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()>;

    fn draw(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        self.render(canvas)
    }

    fn iterate(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        self.render(canvas)
    }
}
