// ABOUTME: Border glyph sets applied to leaf panes.
// ABOUTME: Derives per-side border thickness from which glyphs are present.

use serde::{Deserialize, Serialize};

/// Eight border glyphs: four corners and four edges.
///
/// A side is one cell thick if any of its three glyphs (two corners and the
/// edge) is non-empty, otherwise it takes no space. Styles are meant to be
/// built once and shared behind an `Arc` by every pane that uses them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub nw: String,
    pub n: String,
    pub ne: String,
    pub e: String,
    pub se: String,
    pub s: String,
    pub sw: String,
    pub w: String,
}

impl Style {
    /// Single-line box drawing frame
    pub fn frame() -> Self {
        Self::uniform("┌", "─", "┐", "│", "┘", "─", "└", "│")
    }

    /// Blank one-cell margin on every side
    pub fn margin() -> Self {
        Self::uniform(" ", " ", " ", " ", " ", " ", " ", " ")
    }

    /// No border at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a style from glyphs listed clockwise from the top-left corner.
    #[allow(clippy::too_many_arguments)]
    pub fn uniform(
        nw: &str,
        n: &str,
        ne: &str,
        e: &str,
        se: &str,
        s: &str,
        sw: &str,
        w: &str,
    ) -> Self {
        Self {
            nw: nw.to_string(),
            n: n.to_string(),
            ne: ne.to_string(),
            e: e.to_string(),
            se: se.to_string(),
            s: s.to_string(),
            sw: sw.to_string(),
            w: w.to_string(),
        }
    }

    pub fn left(&self) -> u16 {
        thickness(&[&self.nw, &self.w, &self.sw])
    }

    pub fn right(&self) -> u16 {
        thickness(&[&self.ne, &self.e, &self.se])
    }

    pub fn top(&self) -> u16 {
        thickness(&[&self.nw, &self.n, &self.ne])
    }

    pub fn bottom(&self) -> u16 {
        thickness(&[&self.sw, &self.s, &self.se])
    }

    /// Columns taken by the left and right borders together
    pub fn horizontal(&self) -> u16 {
        self.left() + self.right()
    }

    /// Rows taken by the top and bottom borders together
    pub fn vertical(&self) -> u16 {
        self.top() + self.bottom()
    }
}

fn thickness(glyphs: &[&String]) -> u16 {
    u16::from(glyphs.iter().any(|g| !g.is_empty()))
}
