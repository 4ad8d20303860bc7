//! Mapping between the logical canvas and the terminal cell grid.
//!
//! A cell belongs to a canvas rectangle when the cell's center lies inside
//! it, and a pointer event in a cell is reported at the cell's center. Both
//! directions use the same rule, so what the user clicks is what was drawn.

use kiosk_core::geometry::{Point, Rect, Size};

/// A rectangular run of cells, `[col_start, col_end) x [row_start, row_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub col_start: u16,
    pub col_end: u16,
    pub row_start: u16,
    pub row_end: u16,
}

impl CellSpan {
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        (self.row_start..self.row_end)
            .flat_map(move |row| (self.col_start..self.col_end).map(move |col| (col, row)))
    }

    pub fn is_edge(&self, col: u16, row: u16) -> bool {
        col == self.col_start
            || col + 1 == self.col_end
            || row == self.row_start
            || row + 1 == self.row_end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    canvas: Size,
    cols: u16,
    rows: u16,
}

impl Viewport {
    pub fn new(canvas: Size, cols: u16, rows: u16) -> Self {
        Self {
            canvas,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Canvas pixels covered by one column.
    pub fn px_per_col(&self) -> f32 {
        self.canvas.width as f32 / self.cols as f32
    }

    /// Canvas pixels covered by one row.
    pub fn px_per_row(&self) -> f32 {
        self.canvas.height as f32 / self.rows as f32
    }

    /// Canvas position of the center of a cell.
    pub fn to_canvas(&self, col: u16, row: u16) -> Point {
        Point::new(
            ((col as f32 + 0.5) * self.px_per_col()) as i32,
            ((row as f32 + 0.5) * self.px_per_row()) as i32,
        )
    }

    /// Column containing canvas x, unclamped.
    pub fn col_at(&self, x: i32) -> i32 {
        (x as f32 / self.px_per_col()).floor() as i32
    }

    /// Row containing canvas y, unclamped.
    pub fn row_at(&self, y: i32) -> i32 {
        (y as f32 / self.px_per_row()).floor() as i32
    }

    /// Cells whose centers fall inside `rect`, clipped to the grid.
    pub fn span(&self, rect: Rect) -> Option<CellSpan> {
        let first = |edge: i32, px: f32, limit: u16| -> u16 {
            ((edge as f32 / px - 0.5).ceil().max(0.0) as u32).min(limit as u32) as u16
        };
        let col_start = first(rect.x, self.px_per_col(), self.cols);
        let col_end = first(rect.right(), self.px_per_col(), self.cols);
        let row_start = first(rect.y, self.px_per_row(), self.rows);
        let row_end = first(rect.bottom(), self.px_per_row(), self.rows);
        (col_start < col_end && row_start < row_end).then_some(CellSpan {
            col_start,
            col_end,
            row_start,
            row_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        // 10px x 20px cells.
        Viewport::new(Size::new(900, 560), 90, 28)
    }

    #[test]
    fn cell_centers_map_to_canvas() {
        let vp = viewport();
        assert_eq!(vp.to_canvas(0, 0), Point::new(5, 10));
        assert_eq!(vp.to_canvas(89, 27), Point::new(895, 550));
        assert_eq!(vp.col_at(895), 89);
        assert_eq!(vp.row_at(-1), -1);
    }

    #[test]
    fn span_selects_cells_by_center() {
        let vp = viewport();
        let span = vp.span(Rect::new(60, 130, 260, 300)).unwrap();
        // Column 6 has its center at x=65, column 31 at x=315, column 32 at 325.
        assert_eq!(span.col_start, 6);
        assert_eq!(span.col_end, 32);
        // Row 6 has its center at y=130, the first row inside.
        assert_eq!(span.row_start, 6);
        assert_eq!(span.row_end, 21);
    }

    #[test]
    fn clicks_in_drawn_cells_hit_the_rect() {
        let vp = Viewport::new(Size::new(900, 560), 117, 37);
        let rect = Rect::new(340, 130, 260, 300);
        let span = vp.span(rect).unwrap();
        for (col, row) in span.cells() {
            assert!(rect.contains(vp.to_canvas(col, row)), "cell {col},{row}");
        }
        // The cells just outside the span miss.
        assert!(!rect.contains(vp.to_canvas(span.col_end, span.row_start)));
        assert!(!rect.contains(vp.to_canvas(span.col_start - 1, span.row_start)));
    }

    #[test]
    fn span_is_clipped_and_may_be_empty() {
        let vp = viewport();
        let span = vp.span(Rect::new(-50, -50, 2000, 2000)).unwrap();
        assert_eq!((span.col_start, span.col_end), (0, 90));
        assert_eq!((span.row_start, span.row_end), (0, 28));
        assert!(vp.span(Rect::new(1000, 0, 50, 50)).is_none());
        assert!(vp.span(Rect::new(0, 0, 4, 4)).is_none());
    }

    #[test]
    fn edges_are_detected() {
        let span = CellSpan {
            col_start: 2,
            col_end: 5,
            row_start: 1,
            row_end: 4,
        };
        assert!(span.is_edge(2, 2));
        assert!(span.is_edge(4, 2));
        assert!(span.is_edge(3, 1));
        assert!(!span.is_edge(3, 2));
        assert_eq!(span.cells().count(), 9);
    }
}
