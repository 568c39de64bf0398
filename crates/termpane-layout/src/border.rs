// ABOUTME: Border rendering for styled leaf panes.
// ABOUTME: Writes corner and edge glyphs in raw pane coordinates.

use std::io;

use termpane_core::Style;

use crate::Canvas;

impl Canvas<'_> {
    /// Draw `style` around the edge of this canvas.
    ///
    /// Corners are drawn only where both adjoining sides have thickness.
    /// Edges span the cells between the corner columns/rows.
    pub fn draw_border(&mut self, style: &Style) -> io::Result<()> {
        let (l, r, t, b) = (style.left(), style.right(), style.top(), style.bottom());
        let width = self.width();
        let height = self.height();
        let last_col = width.saturating_sub(1);
        let last_row = height.saturating_sub(1);

        if width == 0 || height == 0 {
            return Ok(());
        }

        let corners = [
            (l > 0 && t > 0, 0, 0, &style.nw),
            (l > 0 && b > 0, 0, last_row, &style.sw),
            (r > 0 && t > 0, last_col, 0, &style.ne),
            (r > 0 && b > 0, last_col, last_row, &style.se),
        ];
        for (present, x, y, glyph) in corners {
            if present && !glyph.is_empty() {
                self.write_raw(x, y, glyph)?;
            }
        }

        let span = width.saturating_sub(l + r) as usize;
        if t > 0 && !style.n.is_empty() && span > 0 {
            self.write_raw(l, 0, &style.n.repeat(span))?;
        }
        if b > 0 && !style.s.is_empty() && span > 0 {
            self.write_raw(l, last_row, &style.s.repeat(span))?;
        }

        let rows = t..height.saturating_sub(b);
        if l > 0 && !style.w.is_empty() {
            for y in rows.clone() {
                self.write_raw(0, y, &style.w)?;
            }
        }
        if r > 0 && !style.e.is_empty() {
            for y in rows {
                self.write_raw(last_col, y, &style.e)?;
            }
        }

        Ok(())
    }
}
