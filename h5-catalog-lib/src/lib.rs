//! Games catalog generator for the H5 front-end.
//!
//! Walks the bundled mini-games, infers a display name and thumbnail for
//! each from its loose assets, and emits the catalog as JSON plus a
//! TypeScript constant. Also builds the `songs.json` audio listings.

pub mod category;
pub mod emit;
pub mod error;
pub mod generator;
pub mod image;
pub mod name;
pub mod progress;
pub mod scanner;
pub mod settings;
pub mod songs;

pub use h5_catalog_core::{Catalog, Category, GameRecord};

pub use category::{CategorySource, FixedCategories, RandomCategories};
pub use emit::{CatalogWriter, JsonWriter, TsConstWriter};
pub use error::GenerateError;
pub use generator::{GenerateSummary, build_catalog, build_record, generate};
pub use image::ImageLocator;
pub use name::extract_name;
pub use progress::{GenerateProgress, LogProgress, SilentProgress};
pub use scanner::{DirNameMode, GameDir, scan_game_dirs};
pub use settings::{Settings, SettingsError, resolve_project_root, settings_path};
pub use songs::{SongEntry, SongsDirOutcome, SongsSummary, generate_songs};
