use std::path::PathBuf;

use thiserror::Error;

use h5_catalog_core::CatalogError;

/// Fatal errors for a generator run.
///
/// Anything that reaches this type stops the run before output is written
/// (or, for write failures, before the remaining outputs are written).
/// Per-game naming and image problems never become a `GenerateError`.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The games root could not be listed
    #[error("Cannot read games root {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An entry under the games root could not be inspected
    #[error("Cannot inspect {path}: {source}")]
    EntryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog invariant violated while assembling records
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Serializing an output failed
    #[error("Failed to render {target}: {source}")]
    Render {
        target: &'static str,
        source: serde_json::Error,
    },

    /// Creating an output directory or writing a file failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
