//! Catalog generation.
//!
//! Runs the stages in order for each game directory (name, category, image),
//! then renders and writes every output from the finished catalog.
//!
//! Failure policy has two tiers. Problems with a single game (unreadable
//! entry document, unlistable image folder) are logged and replaced with
//! defaults. Anything affecting the catalog as a whole (unreadable games
//! root, render or write failure) aborts the run with a [`GenerateError`].

use std::path::{Path, PathBuf};

use h5_catalog_core::{Catalog, GameRecord, fallback_name};

use crate::category::CategorySource;
use crate::emit::{CatalogWriter, JsonWriter, TsConstWriter, render_all, write_file};
use crate::error::GenerateError;
use crate::image::ImageLocator;
use crate::name::extract_name;
use crate::progress::GenerateProgress;
use crate::scanner::{GameDir, scan_game_dirs};
use crate::settings::{GamesSettings, resolve};

/// Result of a successful generator run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub catalog: Catalog,
    /// Files written, in write order.
    pub outputs: Vec<PathBuf>,
}

/// Build the record for one game directory.
///
/// Never fails: a missing name becomes `游戏 {id}` and an image lookup
/// error becomes the default thumbnail.
pub fn build_record(
    dir: &GameDir,
    locator: &ImageLocator,
    categories: &mut dyn CategorySource,
) -> GameRecord {
    let mut name = extract_name(&dir.path);
    if name.is_empty() {
        name = fallback_name(dir.id);
    }

    let category = categories.next_category();

    let image = match locator.locate(&dir.path, &dir.name) {
        Ok(image) => image,
        Err(e) => {
            log::warn!(
                "Image lookup failed for {}: {}; using default",
                dir.path.display(),
                e
            );
            locator.default_image().to_string()
        }
    };

    GameRecord::new(dir.id, name, category, image)
}

/// Enumerate `games_root` and build the catalog in ascending id order.
pub fn build_catalog(
    games_root: &Path,
    settings: &GamesSettings,
    categories: &mut dyn CategorySource,
    progress: &dyn GenerateProgress,
) -> Result<Catalog, GenerateError> {
    let dirs = scan_game_dirs(games_root, settings.dir_names)?;
    progress.on_found(dirs.len());

    let locator = ImageLocator::new(settings.public_root(), settings.default_image.clone());
    let total = dirs.len();
    let mut catalog = Catalog::new();
    for (i, dir) in dirs.iter().enumerate() {
        let record = build_record(dir, &locator, categories);
        progress.on_game(i + 1, total, record.id, &record.name);
        catalog.push(record)?;
    }
    Ok(catalog)
}

/// Generate the catalog for a project and write the JSON and TypeScript outputs.
///
/// Both outputs are rendered from the same catalog before either is written.
pub fn generate(
    project_root: &Path,
    settings: &GamesSettings,
    categories: &mut dyn CategorySource,
    progress: &dyn GenerateProgress,
) -> Result<GenerateSummary, GenerateError> {
    let games_root = resolve(project_root, &settings.root);
    let catalog = build_catalog(&games_root, settings, categories, progress)?;

    let ts_writer = TsConstWriter::new(settings.ts_const_name.clone());
    let targets: Vec<(&dyn CatalogWriter, PathBuf)> = vec![
        (
            &JsonWriter as &dyn CatalogWriter,
            resolve(project_root, &settings.json_output),
        ),
        (
            &ts_writer as &dyn CatalogWriter,
            resolve(project_root, &settings.ts_output),
        ),
    ];
    let rendered = render_all(&catalog, &targets)?;

    let mut outputs = Vec::with_capacity(rendered.len());
    for output in rendered {
        write_file(&output.path, &output.contents)?;
        progress.on_written(output.label, &output.path);
        outputs.push(output.path);
    }

    Ok(GenerateSummary { catalog, outputs })
}
