//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "h5-catalog")]
#[command(about = "Generate the games and audio catalogs for the H5 front-end", long_about = None)]
pub(crate) struct Cli {
    /// Project root containing public/ and src/ (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Command to run (defaults to `games`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for the games catalog.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct GamesArgs {
    /// Seed for the category draw, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Accept directory names that merely start with digits (e.g. "12abc")
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Generate games_data.json and the games.ts constant
    Games(GamesArgs),

    /// Generate songs.json for each audio directory
    Songs,

    /// Inspect generator settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Games(GamesArgs::default())
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
