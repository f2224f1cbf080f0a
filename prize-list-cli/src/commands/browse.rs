//! Line-oriented interactive session over the filtered list.

use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use prize_list_lib::settings::Settings;
use prize_list_lib::{FilterEvent, StorePlatform};

use crate::CliError;
use crate::cli_types::FilterArgs;
use crate::render::render_list;

use super::{Sources, initial_filters, load_app_state};

/// One line typed at the browse prompt.
#[derive(Debug, PartialEq)]
enum BrowseCommand {
    /// Replace the search text; empty clears it.
    Search(String),
    /// Set a platform toggle, or flip it when no state is given.
    Toggle(StorePlatform, Option<bool>),
    Warnings(bool),
    Goto(String),
    Clear,
    Help,
    Quit,
}

fn parse_on_off(word: &str) -> Option<bool> {
    match word.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Some(true),
        "off" | "false" | "no" => Some(false),
        _ => None,
    }
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_string())),
        "toggle" | "t" => {
            let mut words = rest.split_whitespace();
            let platform = words
                .next()
                .ok_or("usage: toggle <platform> [on|off]")?
                .parse::<StorePlatform>()
                .map_err(|e| e.to_string())?;
            let state = match words.next() {
                Some(word) => Some(parse_on_off(word).ok_or(format!("expected on or off, got '{}'", word))?),
                None => None,
            };
            Ok(BrowseCommand::Toggle(platform, state))
        }
        "warnings" | "w" => parse_on_off(rest)
            .map(BrowseCommand::Warnings)
            .ok_or_else(|| "usage: warnings on|off".to_string()),
        "goto" | "g" => Ok(BrowseCommand::Goto(rest.to_string())),
        "clear" => Ok(BrowseCommand::Clear),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn print_help() {
    log::info!("Commands:");
    log::info!("  search <text>               filter by words (empty clears)");
    log::info!("  toggle <platform> [on|off]  linux, macos or windows");
    log::info!("  warnings on|off             include items with content warnings");
    log::info!("  goto <slug>                 jump to a row (empty clears)");
    log::info!("  clear                       reset search and jump target");
    log::info!("  help                        show this help");
    log::info!("  quit                        leave");
}

pub(crate) fn run_browse(
    sources: &Sources,
    settings: &Settings,
    args: &FilterArgs,
) -> Result<(), CliError> {
    let filters = initial_filters(settings, args);
    let fragment = args.fragment.as_deref().unwrap_or("");
    let mut state = load_app_state(sources, filters, fragment)?;
    let mut link = state.deep_link();
    render_list(&state, link.as_ref(), false);

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".if_supports_color(Stdout, |t| t.bold()));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                log::warn!("{}", msg);
                continue;
            }
        };

        link = match command {
            BrowseCommand::Search(text) => state.apply(FilterEvent::SearchChanged(text)),
            BrowseCommand::Toggle(platform, enabled) => {
                let enabled = enabled.unwrap_or(!state.filters().platform_enabled(platform));
                state.apply(FilterEvent::PlatformToggled(platform, enabled))
            }
            BrowseCommand::Warnings(show) => state.apply(FilterEvent::ContentWarningsToggled(show)),
            BrowseCommand::Goto(fragment) => {
                let link = state.apply(FilterEvent::FragmentChanged(fragment.clone()));
                if link.is_none() && !fragment.is_empty() {
                    log::warn!("No item with slug '{}'", fragment.trim_start_matches('#'));
                }
                link
            }
            BrowseCommand::Clear => {
                state.apply(FilterEvent::SearchChanged(String::new()));
                state.apply(FilterEvent::FragmentChanged(String::new()))
            }
            BrowseCommand::Help => {
                print_help();
                continue;
            }
            BrowseCommand::Quit => break,
        };
        render_list(&state, link.as_ref(), false);
    }
    Ok(())
}
