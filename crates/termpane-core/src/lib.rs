// ABOUTME: Shared types and configuration for termpane.
// ABOUTME: Defines sizes, border styles, the output sink trait, and config file handling.

pub mod config;
pub mod geometry;
pub mod layout;
pub mod screen;
pub mod style;

pub use config::{Config, ConfigError};
pub use geometry::Size;
pub use layout::{Axis, PaneSpec, SplitSpec, SplitUnit, StylePreset, StyleSpec};
pub use screen::{MemoryScreen, Put, Screen};
pub use style::Style;
