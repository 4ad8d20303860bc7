//! In-crate fakes for the capability traits.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::geometry::{Color, Rect, Size};
use crate::image::{ImageHandle, ImageLoader};
use crate::platform::Platform;
use crate::render::{Font, Surface, TextAnchor};

pub const CHAR_WIDTH: u32 = 10;
pub const LINE_HEIGHT: u32 = 24;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color },
    Text { text: String, font: Font, anchor: TextAnchor },
    Image { rect: Rect, alpha: u8, placeholder: bool },
}

/// Records every call; text is `CHAR_WIDTH` pixels per character.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<(Rect, u8)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image { rect, alpha, .. } => Some((*rect, *alpha)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn measure_text(&self, _font: Font, text: &str) -> u32 {
        text.chars().count() as u32 * CHAR_WIDTH
    }

    fn line_height(&self, _font: Font) -> u32 {
        LINE_HEIGHT
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, _radius: u32) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, _width: u32, _radius: u32) {
        self.ops.push(DrawOp::StrokeRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, font: Font, _color: Color, anchor: TextAnchor) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            font,
            anchor,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, rect: Rect, alpha: u8) {
        self.ops.push(DrawOp::Image {
            rect,
            alpha,
            placeholder: image.is_placeholder(),
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingPlatform {
    pub clicks: usize,
    pub opened: Vec<String>,
    pub exits: usize,
}

impl Platform for RecordingPlatform {
    fn play_click(&mut self) {
        self.clicks += 1;
    }

    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn exit(&mut self) {
        self.exits += 1;
    }
}

/// Always returns placeholders and remembers what was asked for.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub requests: RefCell<Vec<(PathBuf, Size)>>,
}

impl ImageLoader for RecordingLoader {
    fn load_image(&self, path: &Path, size: Size, fallback: Color) -> ImageHandle {
        self.requests.borrow_mut().push((path.to_path_buf(), size));
        ImageHandle::placeholder(size, fallback)
    }
}
