//! prize-list CLI
//!
//! Command-line front end for browsing a catalog of giveaway game keys.

mod cli_types;
mod commands;
mod error;
mod logging;
mod render;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
use prize_list_lib::settings::{self, DocumentKind};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings();
    let sources = commands::Sources {
        config: settings.resolve_source(DocumentKind::Config, cli.config_doc),
        catalog: settings.resolve_source(DocumentKind::Catalog, cli.catalog_doc),
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::List {
            filters,
            descriptions,
            json,
        } => commands::list::run_list(&sources, &settings, &filters, descriptions, json),
        Commands::Show { slug } => commands::show::run_show(&sources, &settings, &slug),
        Commands::Browse { filters } => commands::browse::run_browse(&sources, &settings, &filters),
        Commands::Validate => commands::validate::run_validate(&sources),
        Commands::Config { action } => commands::config::run_config(action, &sources, settings),
    }
}
