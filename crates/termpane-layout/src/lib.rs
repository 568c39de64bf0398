// ABOUTME: Pane layout management for terminal dashboards.
// ABOUTME: Binary split tree with absolute cell geometry, borders, and widget content.

mod border;
mod build;
mod canvas;
mod pane;
mod widget;

pub use build::build;
pub use canvas::{Canvas, Rect};
pub use pane::{LayoutError, Pane, SplitRule, PLACEHOLDER};
pub use widget::Widget;
