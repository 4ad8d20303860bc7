use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::CatalogEntry;
use crate::error::{KioskError, Result};
use crate::geometry::Size;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Window (terminal) title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Heading shown on the splash screen.
    #[serde(default = "default_heading")]
    pub heading: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_logo")]
    pub logo: PathBuf,

    #[serde(default = "default_click_sound")]
    pub click_sound: PathBuf,
}

fn default_width() -> u32 {
    900
}
fn default_height() -> u32 {
    560
}
fn default_fps() -> u32 {
    60
}
fn default_title() -> String {
    "LAUNCHER FERIA ISB 2025 - MI CARRERA IDEAL".to_string()
}
fn default_heading() -> String {
    "Feria de Universidades ISB 2025".to_string()
}
fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}
fn default_logo() -> PathBuf {
    PathBuf::from("isb.png")
}
fn default_click_sound() -> PathBuf {
    PathBuf::from("click.wav")
}

fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            name: "ITAM".to_string(),
            area: "Ingeniería".to_string(),
            url: "https://www.itam.mx/".to_string(),
            image: PathBuf::from("itam.png"),
            summary: "El ITAM ofrece programas de ingeniería con un enfoque en innovación y tecnología."
                .to_string(),
        },
        CatalogEntry {
            name: "TEC".to_string(),
            area: "Tecnologías de la Información".to_string(),
            url: "https://tec.mx/es/profesional".to_string(),
            image: PathBuf::from("tec.png"),
            summary: "El TEC es reconocido por sus programas en tecnologías de la información y desarrollo de software."
                .to_string(),
        },
        CatalogEntry {
            name: "Anahuac".to_string(),
            area: "Ingeniería y Computación".to_string(),
            url: "https://www.anahuac.mx/".to_string(),
            image: PathBuf::from("anahuac.png"),
            summary: "La Universidad Anáhuac ofrece carreras en ingeniería y computación con un enfoque global."
                .to_string(),
        },
    ]
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            assets: AssetsConfig::default(),
            catalog: default_catalog(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fps: default_fps(),
            title: default_title(),
            heading: default_heading(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            logo: default_logo(),
            click_sound: default_click_sound(),
        }
    }
}

impl KioskConfig {
    /// Load config from ~/.config/kiosk/config.toml, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KioskError::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        Self::parse(&contents)
    }

    /// Parse and validate a TOML document.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: KioskConfig = toml::from_str(contents)
            .map_err(|e| KioskError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(KioskError::Config(
                "display width and height must be non-zero".into(),
            ));
        }
        if self.display.fps == 0 {
            return Err(KioskError::Config("display fps must be non-zero".into()));
        }
        Ok(())
    }

    /// Logical canvas size.
    pub fn canvas(&self) -> Size {
        Size::new(self.display.width, self.display.height)
    }

    /// Resolve an asset path against the configured assets directory.
    pub fn asset_path(&self, relative: &Path) -> PathBuf {
        self.assets.dir.join(relative)
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            KioskError::Config("Could not determine config directory".into())
        })?;
        Ok(config_dir.join("kiosk").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = KioskConfig::parse("").unwrap();
        assert_eq!(config.canvas(), Size::new(900, 560));
        assert_eq!(config.display.fps, 60);
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.catalog[0].name, "ITAM");
    }

    #[test]
    fn catalog_order_is_preserved() {
        let config = KioskConfig::parse(
            r#"
            [display]
            fps = 30

            [[catalog]]
            name = "B"
            area = "Area B"
            url = "https://b.example/"
            image = "b.png"
            summary = "second"

            [[catalog]]
            name = "A"
            area = "Area A"
            url = "not a url"
            image = "a.png"
            summary = "first"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.fps, 30);
        assert_eq!(config.display.width, 900);
        let names: Vec<_> = config.catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
        // URLs are passed through untouched.
        assert_eq!(config.catalog[1].url, "not a url");
    }

    #[test]
    fn zero_fps_is_rejected() {
        let err = KioskConfig::parse("[display]\nfps = 0\n").unwrap_err();
        assert!(matches!(err, KioskError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = KioskConfig::parse("[display\nwidth = ").unwrap_err();
        assert!(matches!(err, KioskError::Config(_)));
    }

    #[test]
    fn asset_paths_resolve_under_assets_dir() {
        let config = KioskConfig::default();
        assert_eq!(
            config.asset_path(Path::new("itam.png")),
            PathBuf::from("assets").join("itam.png")
        );
    }
}
