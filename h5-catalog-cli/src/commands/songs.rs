use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use h5_catalog_lib::{Settings, generate_songs};

use crate::error::CliError;

/// Write `songs.json` for each configured audio directory.
///
/// Per-directory failures are reported but do not fail the command.
pub(crate) fn run_songs(project_root: &Path) -> Result<(), CliError> {
    let settings = Settings::load(project_root)?.songs;
    let summary = generate_songs(project_root, &settings);

    log::info!("");
    if summary.failures() == 0 {
        log::info!(
            "{} All directories processed, {} files listed",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.total_files(),
        );
    } else {
        log::warn!(
            "{} {} of {} directories failed, {} files listed",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            summary.failures(),
            summary.dirs.len(),
            summary.total_files(),
        );
    }
    Ok(())
}
