/// Maps the fixed 800×600 logical canvas onto a terminal cell grid.

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::error::SurfaceError;
use crate::geometry::Rect;
use crate::scene::{Align, Label};

pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 15;

/// A block of terminal cells, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Result<Self, SurfaceError> {
        if cols < MIN_COLS || rows < MIN_ROWS {
            return Err(SurfaceError::TooSmall { cols, rows });
        }
        Ok(Viewport { cols, rows })
    }

    fn scale_x(&self, x: f32) -> f32 {
        x * self.cols as f32 / CANVAS_WIDTH
    }

    fn scale_y(&self, y: f32) -> f32 {
        y * self.rows as f32 / CANVAS_HEIGHT
    }

    /// Cells covered by `rect`, clipped to the surface.  Anything with area
    /// on the canvas covers at least one cell; `None` if it is fully outside.
    pub fn cells(&self, rect: &Rect) -> Option<CellRect> {
        let (col, cols) = span(self.scale_x(rect.x), self.scale_x(rect.right()), self.cols)?;
        let (row, rows) = span(self.scale_y(rect.y), self.scale_y(rect.bottom()), self.rows)?;
        Some(CellRect { col, row, cols, rows })
    }

    /// Where a label starts and the part of its text that fits on its row.
    pub fn place<'a>(&self, label: &'a Label) -> Option<(u16, u16, &'a str)> {
        let row = self.scale_y(label.y).floor();
        if row < 0.0 || row >= self.rows as f32 {
            return None;
        }
        let anchor = self.scale_x(label.x).floor().max(0.0) as u16;
        let len = label.text.chars().count() as u16;
        let col = match label.align {
            Align::Left => anchor,
            Align::Center => anchor.saturating_sub(len / 2),
        };
        if col >= self.cols {
            return None;
        }
        let fits = (self.cols - col) as usize;
        let text = match label.text.char_indices().nth(fits) {
            Some((end, _)) => &label.text[..end],
            None => label.text.as_str(),
        };
        Some((col, row as u16, text))
    }
}

/// Convert a scaled [start, end) interval into a clipped cell span.
fn span(start: f32, end: f32, limit: u16) -> Option<(u16, u16)> {
    if end <= 0.0 || start >= limit as f32 || end <= start {
        return None;
    }
    let first = start.floor().max(0.0) as u16;
    let last = (end.ceil() as u16).min(limit);
    Some((first, last.saturating_sub(first).max(1)))
}
