use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use h5_catalog_lib::settings::resolve;
use h5_catalog_lib::{CategorySource, DirNameMode, LogProgress, RandomCategories, Settings, generate};

use crate::cli_types::GamesArgs;
use crate::error::CliError;

/// Generate the games catalog and write both outputs.
pub(crate) fn run_games(project_root: &Path, args: GamesArgs) -> Result<(), CliError> {
    let mut settings = Settings::load(project_root)?.games;
    if args.lenient {
        settings.dir_names = DirNameMode::Lenient;
    }

    let mut categories: Box<dyn CategorySource> = match args.seed {
        Some(seed) => {
            log::debug!("Category seed: {}", seed);
            Box::new(RandomCategories::seeded(seed))
        }
        None => Box::new(RandomCategories::from_os()),
    };

    log::info!(
        "Scanning {}",
        resolve(project_root, &settings.root)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );

    let summary = generate(project_root, &settings, categories.as_mut(), &LogProgress)?;

    log::info!("");
    log::info!(
        "{} Generated {} games",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.catalog.len(),
    );
    for path in &summary.outputs {
        log::info!("  {}", path.display());
    }
    Ok(())
}
