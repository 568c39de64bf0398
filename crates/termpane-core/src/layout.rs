// ABOUTME: Declarative description of a pane layout.
// ABOUTME: Split axes, split units, and the recursive pane spec loaded from config.

use serde::{Deserialize, Serialize};

use crate::Style;

/// Direction along which a pane is divided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Top/bottom children: height is partitioned, width is shared
    Horizontal,
    /// Left/right children: width is partitioned, height is shared
    Vertical,
}

/// How a split value is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplitUnit {
    /// Percentage of the partitioned dimension
    #[default]
    Percent,
    /// Fixed number of character cells
    Char,
}

/// Built-in border styles that can be named in a layout file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    Frame,
    Margin,
    None,
}

impl StylePreset {
    pub fn style(&self) -> Style {
        match self {
            StylePreset::Frame => Style::frame(),
            StylePreset::Margin => Style::margin(),
            StylePreset::None => Style::none(),
        }
    }
}

/// Either a preset name (`style = "frame"`) or an inline glyph table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSpec {
    Preset(StylePreset),
    Custom(Style),
}

impl StyleSpec {
    pub fn to_style(&self) -> Style {
        match self {
            StyleSpec::Preset(preset) => preset.style(),
            StyleSpec::Custom(style) => style.clone(),
        }
    }
}

/// One node of a layout description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneSpec {
    /// Pane name; generated from the parent's name when omitted
    pub name: Option<String>,
    pub style: Option<StyleSpec>,
    /// Widget to attach to this pane if it stays a leaf
    pub widget: Option<String>,
    pub split: Option<Box<SplitSpec>>,
}

/// Split rule for an internal node, with the specs of both children.
///
/// A negative `value` gives the fixed share to `first` (left or top), a
/// positive one gives it to `second` (right or bottom).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSpec {
    pub axis: Axis,
    pub value: i32,
    #[serde(default)]
    pub unit: SplitUnit,
    #[serde(default)]
    pub first: PaneSpec,
    #[serde(default)]
    pub second: PaneSpec,
}

impl PaneSpec {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: StyleSpec) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_widget(mut self, widget: impl Into<String>) -> Self {
        self.widget = Some(widget.into());
        self
    }

    pub fn with_split(
        mut self,
        axis: Axis,
        value: i32,
        unit: SplitUnit,
        first: PaneSpec,
        second: PaneSpec,
    ) -> Self {
        self.split = Some(Box::new(SplitSpec {
            axis,
            value,
            unit,
            first,
            second,
        }));
        self
    }

    /// Number of leaves this spec produces
    pub fn leaf_count(&self) -> usize {
        match &self.split {
            Some(split) => split.first.leaf_count() + split.second.leaf_count(),
            None => 1,
        }
    }
}
