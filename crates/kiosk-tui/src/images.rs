//! Image loading from disk with the `image` crate.

use std::path::Path;

use image::imageops::FilterType;
use tracing::{debug, warn};

use kiosk_core::geometry::{Color, Size};
use kiosk_core::image::{ImageHandle, ImageLoader};
use kiosk_core::theme::Theme;

/// Decodes PNG/JPEG files and scales them to the requested size. Transparent
/// pixels are flattened onto the scene background.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load_image(&self, path: &Path, size: Size, fallback: Color) -> ImageHandle {
        if !path.exists() {
            debug!(path = %path.display(), "Image missing, using placeholder");
            return ImageHandle::placeholder(size, fallback);
        }

        let decoded = match image::open(path) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(path = %path.display(), "Failed to decode image: {}", e);
                return ImageHandle::placeholder(size, fallback);
            }
        };

        let matte = Theme::background();
        let pixels = decoded
            .resize_exact(size.width, size.height, FilterType::Triangle)
            .to_rgba8()
            .pixels()
            .map(|p| matte.blend(Color::rgb(p[0], p[1], p[2]), p[3]))
            .collect();

        ImageHandle::from_pixels(size, pixels)
            .unwrap_or_else(|| ImageHandle::placeholder(size, fallback))
    }
}
