//! Viewer configuration: where the reference data comes from.

use std::path::PathBuf;

use catalogview_catalog::{CatalogResult, ReferenceData};

/// Environment variable naming a directory with the catalog JSON files.
pub const DATA_DIR_ENV: &str = "CATALOG_DATA_DIR";

/// Source of the reference collections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The data set compiled into the catalog crate.
    #[default]
    Bundled,
    /// A directory holding `users.json`, `categories.json` and `products.json`.
    Directory(PathBuf),
}

impl DataSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map_or(DataSource::Bundled, DataSource::Directory)
    }

    pub fn load(&self) -> CatalogResult<ReferenceData> {
        match self {
            DataSource::Bundled => ReferenceData::bundled(),
            DataSource::Directory(dir) => ReferenceData::load_dir(dir),
        }
    }
}
