//! h5-catalog CLI
//!
//! Regenerates the games catalog (`games_data.json` + `games.ts`) and the
//! audio listings (`songs.json`) for the H5 front-end. Running with no
//! arguments regenerates the games catalog for the current directory.

mod cli_types;
mod commands;
mod error;
mod logger;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use h5_catalog_lib::resolve_project_root;

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_path, run_config_show};
use commands::games::run_games;
use commands::songs::run_songs;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let project_root = resolve_project_root(cli.root);

    let result = match cli.command.unwrap_or_default() {
        Commands::Games(args) => run_games(&project_root, args),
        Commands::Songs => run_songs(&project_root),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&project_root),
            ConfigAction::Path => run_config_path(&project_root),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e
        );
        log::logger().flush();
        std::process::exit(1);
    }
}
