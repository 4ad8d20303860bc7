//! `Surface` implementation over a ratatui buffer.
//!
//! Every cell is a block of canvas pixels: fills and images paint the cell
//! background, text and borders paint the foreground.

use ratatui::buffer::Buffer;
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::Span;

use kiosk_core::geometry::{Color, Point, Rect, Size};
use kiosk_core::image::{ImageHandle, ImageSource};
use kiosk_core::render::{Font, Surface, TextAnchor};
use kiosk_core::theme::Theme;

use crate::viewport::{CellSpan, Viewport};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    viewport: Viewport,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, canvas: Size) -> Self {
        let viewport = Viewport::new(canvas, buf.area.width, buf.area.height);
        Self { buf, viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> Option<&mut ratatui::buffer::Cell> {
        let x = self.buf.area.x.checked_add(col)?;
        let y = self.buf.area.y.checked_add(row)?;
        self.buf.cell_mut((x, y))
    }

    /// Background currently under a cell, or the scene background when the
    /// cell has never been painted.
    fn background_at(&self, col: u16, row: u16) -> Color {
        let x = self.buf.area.x + col;
        let y = self.buf.area.y + row;
        match self.buf.cell((x, y)).map(|cell| cell.bg) {
            Some(TermColor::Rgb(r, g, b)) => Color::rgb(r, g, b),
            _ => Theme::background(),
        }
    }

    fn paint(&mut self, span: CellSpan, mut color_at: impl FnMut(u16, u16) -> Color) {
        for (col, row) in span.cells() {
            let color = color_at(col, row);
            if let Some(cell) = self.cell_mut(col, row) {
                cell.set_symbol(" ");
                cell.set_bg(term_color(color));
            }
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn measure_text(&self, _font: Font, text: &str) -> u32 {
        let columns = Span::raw(text).width() as f32;
        (columns * self.viewport.px_per_col()).ceil() as u32
    }

    fn line_height(&self, _font: Font) -> u32 {
        self.viewport.px_per_row().ceil() as u32
    }

    fn clear(&mut self, color: Color) {
        let area = self.buf.area;
        self.buf.set_style(
            area,
            Style::default().bg(term_color(color)).fg(TermColor::Reset),
        );
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, _radius: u32) {
        if let Some(span) = self.viewport.span(rect) {
            self.paint(span, |_, _| color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, _width: u32, radius: u32) {
        let Some(span) = self.viewport.span(rect) else {
            return;
        };
        let (tl, tr, bl, br) = if radius > 0 {
            ("╭", "╮", "╰", "╯")
        } else {
            ("┌", "┐", "└", "┘")
        };
        let last_col = span.col_end - 1;
        let last_row = span.row_end - 1;
        for (col, row) in span.cells().filter(|(c, r)| span.is_edge(*c, *r)) {
            let symbol = match (col, row) {
                (c, r) if c == span.col_start && r == span.row_start => tl,
                (c, r) if c == last_col && r == span.row_start => tr,
                (c, r) if c == span.col_start && r == last_row => bl,
                (c, r) if c == last_col && r == last_row => br,
                (_, r) if r == span.row_start || r == last_row => "─",
                _ => "│",
            };
            if let Some(cell) = self.cell_mut(col, row) {
                cell.set_symbol(symbol);
                cell.set_fg(term_color(color));
            }
        }
    }

    fn draw_text(&mut self, text: &str, font: Font, color: Color, anchor: TextAnchor) {
        let columns = Span::raw(text).width() as i32;
        let (col, row) = match anchor {
            TextAnchor::Center(Point { x, y }) => {
                (self.viewport.col_at(x) - columns / 2, self.viewport.row_at(y))
            }
            TextAnchor::TopLeft(Point { x, y }) => {
                (self.viewport.col_at(x), self.viewport.row_at(y))
            }
        };
        if row < 0 || row >= self.viewport.rows() as i32 {
            return;
        }

        // Drop whatever falls left of the grid.
        let skipped = (-col).max(0) as usize;
        let visible: String = text.chars().skip(skipped).collect();
        let col = col.max(0) as u16;
        if col >= self.viewport.cols() {
            return;
        }

        let mut style = Style::default().fg(term_color(color));
        if font == Font::Title {
            style = style.add_modifier(Modifier::BOLD);
        }
        let max_width = (self.viewport.cols() - col) as usize;
        self.buf.set_stringn(
            self.buf.area.x + col,
            self.buf.area.y + row as u16,
            visible,
            max_width,
            style,
        );
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect, alpha: u8) {
        let Some(span) = self.viewport.span(rect) else {
            return;
        };
        let size = image.size();
        let viewport = self.viewport;
        let border = match image.source() {
            ImageSource::Placeholder { border, .. } => Some(*border),
            ImageSource::Pixels(_) => None,
        };

        let mut colors = Vec::with_capacity(span.cells().count());
        for (col, row) in span.cells() {
            let center = viewport.to_canvas(col, row);
            let sample = match border {
                Some(border) if span.is_edge(col, row) => border,
                _ => {
                    let ix = ((center.x - rect.x).max(0) as u64 * size.width as u64
                        / rect.width.max(1) as u64) as u32;
                    let iy = ((center.y - rect.y).max(0) as u64 * size.height as u64
                        / rect.height.max(1) as u64) as u32;
                    image.sample(ix, iy)
                }
            };
            colors.push(self.background_at(col, row).blend(sample, alpha));
        }

        let mut colors = colors.into_iter();
        self.paint(span, |_, _| colors.next().unwrap_or_default());
    }
}
