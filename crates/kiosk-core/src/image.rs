//! Image handles and the loading capability.

use std::path::Path;
use std::rc::Rc;

use crate::geometry::{Color, Size};
use crate::theme::Theme;

/// Corner radius of the placeholder border.
pub const PLACEHOLDER_RADIUS: u32 = 16;

/// What an image is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Row-major RGB pixels, exactly `width * height` of them.
    Pixels(Rc<[Color]>),
    /// Solid fill with a rounded border, used when the artwork is missing.
    Placeholder { fill: Color, border: Color },
}

/// A decoded image already scaled to the size it will be drawn at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    size: Size,
    source: ImageSource,
}

impl ImageHandle {
    /// The deterministic stand-in for a missing image.
    pub fn placeholder(size: Size, fallback: Color) -> Self {
        Self {
            size,
            source: ImageSource::Placeholder {
                fill: fallback,
                border: Theme::placeholder_border(),
            },
        }
    }

    /// Wrap decoded pixels. Returns `None` if the buffer does not match `size`.
    pub fn from_pixels(size: Size, pixels: Vec<Color>) -> Option<Self> {
        if pixels.len() != size.area() {
            return None;
        }
        Some(Self {
            size,
            source: ImageSource::Pixels(pixels.into()),
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, ImageSource::Placeholder { .. })
    }

    /// Color at image coordinates, clamped to the image bounds.
    pub fn sample(&self, x: u32, y: u32) -> Color {
        match &self.source {
            ImageSource::Placeholder { fill, .. } => *fill,
            ImageSource::Pixels(pixels) => {
                let x = x.min(self.size.width.saturating_sub(1));
                let y = y.min(self.size.height.saturating_sub(1));
                pixels[(y * self.size.width + x) as usize]
            }
        }
    }
}

/// Loads artwork from disk. Implementations never fail: a path that does not
/// resolve, or does not decode, yields `ImageHandle::placeholder(size, fallback)`.
pub trait ImageLoader {
    fn load_image(&self, path: &Path, size: Size, fallback: Color) -> ImageHandle;
}
