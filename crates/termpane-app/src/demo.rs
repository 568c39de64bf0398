// ABOUTME: Built-in sample layout, widget registry, and key handling for the demo.
// ABOUTME: Six clock panes showing the frame, margin, and a custom border style.

use std::io;

use termpane_core::{Axis, PaneSpec, SplitUnit, Style, StylePreset, StyleSpec};
use termpane_layout::Widget;
use termpane_runtime::{Context, Flow, Handler};

use crate::clock::Clock;

pub const QUIT_KEY: u8 = b'q';

const CLOCK: &str = "clock";

/// Widget names usable in a configured layout
pub fn resolve_widget(name: &str) -> Option<Box<dyn Widget>> {
    match name {
        CLOCK => Some(Box::new(Clock)),
        _ => None,
    }
}

fn slanted() -> Style {
    Style::uniform("\\", "_", "/", " ", " ", " ", " ", " ")
}

fn clock(style: &StyleSpec) -> PaneSpec {
    PaneSpec::default()
        .with_style(style.clone())
        .with_widget(CLOCK)
}

/// Layout used when the config does not define one.
pub fn sample_layout() -> PaneSpec {
    let frame = StyleSpec::Preset(StylePreset::Frame);
    let margin = StyleSpec::Preset(StylePreset::Margin);
    let slanted = StyleSpec::Custom(slanted());

    let left = PaneSpec::default().with_split(
        Axis::Horizontal,
        20,
        SplitUnit::Char,
        clock(&frame),
        clock(&frame),
    );
    let middle = PaneSpec::default().with_split(
        Axis::Horizontal,
        50,
        SplitUnit::Percent,
        clock(&margin),
        clock(&margin),
    );
    let right = PaneSpec::default().with_split(
        Axis::Horizontal,
        -35,
        SplitUnit::Char,
        clock(&slanted),
        clock(&frame),
    );

    PaneSpec::default().with_split(
        Axis::Vertical,
        -50,
        SplitUnit::Percent,
        left,
        PaneSpec::default().with_split(Axis::Vertical, -40, SplitUnit::Char, middle, right),
    )
}

/// Exits the event loop on one key and ignores everything else
pub struct QuitKey {
    key: u8,
}

impl QuitKey {
    pub fn new(key: u8) -> Self {
        Self { key }
    }
}

impl Handler for QuitKey {
    fn on_key_press(&mut self, key: u8, _ctx: &mut Context<'_>) -> io::Result<Flow> {
        if key == self.key {
            return Ok(Flow::Exit);
        }
        tracing::debug!("Ignoring key {:#04x}", key);
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termpane_core::{MemoryScreen, Size};
    use termpane_layout::Rect;
    use termpane_runtime::Controller;
    use termpane_terminal::{ModeGuard, TerminalDriver, TerminalError};

    struct FixedSize(Size);
    struct NoopGuard;

    impl ModeGuard for NoopGuard {
        fn restore_mode(&mut self) -> Result<(), TerminalError> {
            Ok(())
        }
    }

    impl TerminalDriver for FixedSize {
        type Guard = NoopGuard;

        fn enter_raw_no_echo(&mut self) -> Result<NoopGuard, TerminalError> {
            Ok(NoopGuard)
        }

        fn query_size(&mut self) -> Result<Size, TerminalError> {
            Ok(self.0)
        }
    }

    #[test]
    fn sample_has_six_clocks() {
        let spec = sample_layout();
        assert_eq!(spec.leaf_count(), 6);

        let root = termpane_layout::build(&spec, resolve_widget).unwrap();
        assert!(root.leaves().iter().all(|p| p.has_widget()));
    }

    #[test]
    fn sample_geometry_at_100_by_40() {
        let mut root = termpane_layout::build(&sample_layout(), resolve_widget).unwrap();
        root.layout(Rect::new(0, 0, 100, 40));

        let rects: Vec<(&str, Rect)> = root
            .leaves()
            .into_iter()
            .map(|p| (p.name(), p.rect()))
            .collect();
        assert_eq!(
            rects,
            vec![
                ("main.1.1", Rect::new(0, 0, 50, 20)),
                ("main.1.2", Rect::new(0, 20, 50, 20)),
                ("main.2.1.1", Rect::new(50, 0, 40, 20)),
                ("main.2.1.2", Rect::new(50, 20, 40, 20)),
                ("main.2.2.1", Rect::new(90, 0, 10, 35)),
                ("main.2.2.2", Rect::new(90, 35, 10, 5)),
            ]
        );
        assert!(root.leaves().iter().all(|p| !p.is_too_small()));
    }

    #[test]
    fn slanted_style_has_thickness_on_every_side() {
        let style = slanted();
        assert_eq!((style.horizontal(), style.vertical()), (2, 2));
        assert_eq!(style.nw, "\\");
        assert_eq!(style.ne, "/");
    }

    #[test]
    fn unknown_widget_name_is_not_resolved() {
        assert!(resolve_widget("clock").is_some());
        assert!(resolve_widget("calendar").is_none());
    }

    #[test]
    fn quit_key_exits_and_others_continue() {
        let root = termpane_layout::build(&sample_layout(), resolve_widget).unwrap();
        let driver = FixedSize(Size::new(100, 40));
        let mut controller =
            Controller::new(driver, MemoryScreen::new(), root).with_handler(QuitKey::new(QUIT_KEY));
        controller.render_tick().unwrap();

        assert_eq!(controller.key_press(b'x').unwrap(), Flow::Continue);
        assert_eq!(controller.key_press(QUIT_KEY).unwrap(), Flow::Exit);
    }
}
