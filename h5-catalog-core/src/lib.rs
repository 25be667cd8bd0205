//! Data model shared by the catalog generator and its front-ends.
//!
//! Holds the record and catalog types, the closed category set with its
//! description table, and small file-name helpers.

pub mod category;
pub mod error;
pub mod record;
pub mod util;

pub use category::{Category, CategoryParseError, GENERIC_DESCRIPTION, description_for};
pub use error::CatalogError;
pub use record::{Catalog, GameRecord, fallback_name};
