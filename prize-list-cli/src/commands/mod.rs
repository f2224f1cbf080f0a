pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod validate;

use prize_list_lib::settings::Settings;
use prize_list_lib::{
    AppState, CatalogEntry, DocumentSource, FilterState, SiteConfig, load_documents, load_state,
};

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::spinner::LoadSpinner;

/// Resolved document sources for this invocation.
pub(crate) struct Sources {
    pub config: DocumentSource,
    pub catalog: DocumentSource,
    pub quiet: bool,
}

/// Starting filters: saved defaults, then command-line overrides.
pub(crate) fn initial_filters(settings: &Settings, args: &FilterArgs) -> FilterState {
    let mut filters = settings.filters.to_filter_state();
    if let Some(search) = &args.search {
        filters.search = search.clone();
    }
    if let Some(platforms) = &args.platforms {
        filters.only_platforms(platforms);
    }
    if args.show_content_warnings {
        filters.show_content_warnings = true;
    }
    filters
}

fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new().map_err(|e| CliError::runtime(e.to_string()))
}

/// Fetch both documents and build the filtered state.
pub(crate) fn load_app_state(
    sources: &Sources,
    filters: FilterState,
    fragment: &str,
) -> Result<AppState, CliError> {
    let rt = runtime()?;
    let spinner = LoadSpinner::start(format!("Loading {}", sources.catalog), sources.quiet);
    let result = rt.block_on(load_state(&sources.config, &sources.catalog, filters, fragment));
    spinner.finish();
    Ok(result?)
}

/// Fetch and parse both documents without building state.
pub(crate) fn load_raw_documents(sources: &Sources) -> Result<(SiteConfig, Vec<CatalogEntry>), CliError> {
    let rt = runtime()?;
    let spinner = LoadSpinner::start(format!("Loading {}", sources.catalog), sources.quiet);
    let result = rt.block_on(load_documents(&sources.config, &sources.catalog));
    spinner.finish();
    Ok(result?)
}
