//! The static list of universities presented by the Menu and Detail scenes.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::{KioskError, Result};

/// One selectable university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub area: String,
    /// Official site, handed to the external opener as-is.
    pub url: String,
    /// Artwork path, relative to the assets directory.
    pub image: PathBuf,
    pub summary: String,
}

/// Immutable, cheaply clonable view over the configured entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Rc<[CatalogEntry]>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Look up an entry a scene is about to be bound to. An out-of-range
    /// index means a widget was wired to an entry that does not exist.
    pub fn entry(&self, index: usize) -> Result<&CatalogEntry> {
        self.entries
            .get(index)
            .ok_or(KioskError::InvalidNavigationTarget {
                entry: index,
                len: self.entries.len(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KioskConfig;

    #[test]
    fn entry_out_of_range_is_invalid_target() {
        let catalog = Catalog::new(KioskConfig::default().catalog);
        assert_eq!(catalog.entry(2).unwrap().name, "Anahuac");
        let err = catalog.entry(3).unwrap_err();
        assert!(matches!(
            err,
            KioskError::InvalidNavigationTarget { entry: 3, len: 3 }
        ));
    }

    #[test]
    fn clones_share_entries() {
        let catalog = Catalog::new(KioskConfig::default().catalog);
        let other = catalog.clone();
        assert!(std::ptr::eq(
            catalog.get(0).unwrap(),
            other.get(0).unwrap()
        ));
    }
}
