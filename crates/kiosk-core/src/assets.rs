//! Artwork loaded once at startup and shared by every scene.

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::KioskConfig;
use crate::geometry::Size;
use crate::image::{ImageHandle, ImageLoader};
use crate::theme::Theme;

pub const LOGO_SIZE: Size = Size::new(220, 220);
pub const ENTRY_IMAGE_SIZE: Size = Size::new(160, 160);

#[derive(Debug, Clone)]
pub struct Assets {
    logo: ImageHandle,
    entry_images: Vec<ImageHandle>,
}

impl Assets {
    pub fn load(config: &KioskConfig, catalog: &Catalog, loader: &dyn ImageLoader) -> Self {
        let logo = loader.load_image(
            &config.asset_path(&config.assets.logo),
            LOGO_SIZE,
            Theme::logo_placeholder(),
        );
        let entry_images = catalog
            .iter()
            .map(|entry| {
                loader.load_image(
                    &config.asset_path(&entry.image),
                    ENTRY_IMAGE_SIZE,
                    Theme::placeholder(),
                )
            })
            .collect::<Vec<_>>();
        debug!(
            entries = entry_images.len(),
            placeholders = entry_images.iter().filter(|i| i.is_placeholder()).count(),
            "Assets loaded"
        );
        Self { logo, entry_images }
    }

    /// Assets made only of placeholders, for when nothing should touch disk.
    pub fn placeholders(catalog: &Catalog) -> Self {
        Self {
            logo: ImageHandle::placeholder(LOGO_SIZE, Theme::logo_placeholder()),
            entry_images: (0..catalog.len())
                .map(|_| ImageHandle::placeholder(ENTRY_IMAGE_SIZE, Theme::placeholder()))
                .collect(),
        }
    }

    pub fn logo(&self) -> &ImageHandle {
        &self.logo
    }

    /// Artwork for the catalog entry at `index`.
    pub fn entry_image(&self, index: usize) -> Option<&ImageHandle> {
        self.entry_images.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingLoader;
    use std::path::PathBuf;

    #[test]
    fn loads_logo_then_entries_in_catalog_order() {
        let config = KioskConfig::default();
        let catalog = Catalog::new(config.catalog.clone());
        let loader = RecordingLoader::default();

        let assets = Assets::load(&config, &catalog, &loader);

        let requests = loader.requests.borrow();
        let expected = [
            (PathBuf::from("assets/isb.png"), LOGO_SIZE),
            (PathBuf::from("assets/itam.png"), ENTRY_IMAGE_SIZE),
            (PathBuf::from("assets/tec.png"), ENTRY_IMAGE_SIZE),
            (PathBuf::from("assets/anahuac.png"), ENTRY_IMAGE_SIZE),
        ];
        assert_eq!(requests.as_slice(), expected);
        assert_eq!(assets.logo().size(), LOGO_SIZE);
        assert!(assets.entry_image(2).is_some());
        assert!(assets.entry_image(3).is_none());
    }
}
