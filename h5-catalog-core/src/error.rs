use thiserror::Error;

/// Errors raised when assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with this id is already in the catalog
    #[error("Duplicate game id: {0}")]
    DuplicateId(u64),

    /// Records must be appended in ascending id order
    #[error("Game id {id} appended after {last}")]
    OutOfOrder { id: u64, last: u64 },
}
