//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hltb")]
#[command(about = "Import HowLongToBeat JSON-lines exports into SQLite", long_about = None)]
pub(crate) struct Cli {
    /// Database file (defaults to settings.toml, then ./games.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import a JSON-lines file into the database
    Import {
        /// Path to the jsonlines file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show row counts for every table
    Stats,

    /// Show one game with its genres and time to beat per platform
    Show {
        /// Exact game name
        name: String,
    },

    /// List recent import runs
    Imports {
        /// Maximum number of runs to list
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,
}
