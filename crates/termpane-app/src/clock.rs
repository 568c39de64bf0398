// ABOUTME: Clock widget showing the local time.
// ABOUTME: Redrawn on every tick in the top-left corner of its pane's content area.

use std::io;

use termpane_layout::{Canvas, Pane, Widget};

const FORMAT: &str = "%H:%M:%S";
/// Width of a formatted `HH:MM:SS`
const MIN_WIDTH: u16 = 8;
const MIN_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct Clock;

impl Widget for Clock {
    fn init(&mut self, pane: &mut Pane) {
        pane.set_min_size(MIN_WIDTH, MIN_HEIGHT);
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) -> io::Result<()> {
        let now = chrono::Local::now().format(FORMAT).to_string();
        canvas.write(0, 0, &now)
    }
}
