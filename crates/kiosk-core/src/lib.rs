pub mod action;
pub mod assets;
pub mod card;
pub mod catalog;
pub mod config;
pub mod director;
pub mod error;
pub mod geometry;
pub mod image;
pub mod input;
pub mod platform;
pub mod render;
pub mod scene;
pub mod text;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{Action, SceneDescriptor};
pub use assets::Assets;
pub use catalog::{Catalog, CatalogEntry};
pub use config::KioskConfig;
pub use director::{Director, Flow};
pub use error::{KioskError, Result};
pub use scene::SceneContext;
