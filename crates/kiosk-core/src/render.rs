//! The rendering capability the scenes draw through.
//!
//! Scenes never own pixels. A host hands a `Surface` to the director for the
//! duration of one frame and flushes it afterwards.

use crate::geometry::{Color, Point, Rect};
use crate::image::ImageHandle;

/// The three type faces used by the kiosk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Large bold headings.
    Title,
    /// Widget labels and card names.
    Body,
    /// Wrapped paragraphs and captions.
    Small,
}

/// Where a string is placed relative to a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Center(Point),
    TopLeft(Point),
}

pub trait Surface {
    /// Rendered width of `text` in canvas pixels.
    fn measure_text(&self, font: Font, text: &str) -> u32;

    /// Distance between consecutive baselines in canvas pixels.
    fn line_height(&self, font: Font) -> u32;

    /// Paint the whole surface.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: u32);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32, radius: u32);

    fn draw_text(&mut self, text: &str, font: Font, color: Color, anchor: TextAnchor);

    /// Draw `image` into `rect` with the given opacity (255 is opaque).
    fn draw_image(&mut self, image: &ImageHandle, rect: Rect, alpha: u8);
}
