use prize_list_lib::settings::Settings;

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::render::render_list;

use super::{Sources, initial_filters, load_app_state};

pub(crate) fn run_list(
    sources: &Sources,
    settings: &Settings,
    args: &FilterArgs,
    descriptions: bool,
    json: bool,
) -> Result<(), CliError> {
    let filters = initial_filters(settings, args);
    let fragment = args.fragment.as_deref().unwrap_or("");
    let state = load_app_state(sources, filters, fragment)?;

    if json {
        let visible: Vec<_> = state.visible_rows().collect();
        let out = serde_json::to_string_pretty(&visible).map_err(|e| CliError::other(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    render_list(&state, state.deep_link().as_ref(), descriptions);
    Ok(())
}
