use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use h5_catalog_lib::{Settings, settings_path};

use crate::error::CliError;

/// Show the effective settings and where they came from.
pub(crate) fn run_config_show(project_root: &Path) -> Result<(), CliError> {
    let path = settings_path(project_root);
    let settings = Settings::load(project_root)?;

    if path.exists() {
        log::info!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");
    for line in settings.to_toml_string()?.lines() {
        log::info!("{}", line);
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(project_root: &Path) -> Result<(), CliError> {
    log::info!("{}", settings_path(project_root).display());
    Ok(())
}
