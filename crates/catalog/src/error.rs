use std::path::PathBuf;

use thiserror::Error;

/// Failures of the reference data provider.
///
/// The engine itself never fails; only loading the collections can.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {collection} collection: {source}")]
    Parse {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
