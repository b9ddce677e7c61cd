//! hltb CLI
//!
//! Command-line interface for importing HowLongToBeat JSON-lines exports
//! into a SQLite games database.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    let settings = settings::load_settings();
    let db_path = settings.resolve_db_path(cli.db);
    let connection = &settings.database.connection;

    let result = match cli.command {
        Commands::Import { file } => {
            commands::import::run_import(&file, &db_path, connection, cli.quiet)
        }
        Commands::Stats => commands::stats::run_stats(&db_path, connection),
        Commands::Show { name } => commands::show::run_show(&name, &db_path, connection),
        Commands::Imports { limit } => {
            commands::imports::run_imports(limit, &db_path, connection)
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(&settings, &db_path),
                ConfigAction::Path => commands::config::run_config_path(),
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
