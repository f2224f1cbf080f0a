use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use prize_list_lib::StorePlatform;
use prize_list_lib::settings::{self, DocumentKind, Settings};

use crate::CliError;
use crate::cli_types::ConfigAction;

use super::Sources;

pub(crate) fn run_config(
    action: ConfigAction,
    sources: &Sources,
    settings: Settings,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            run_config_show(sources, &settings);
            Ok(())
        }
        ConfigAction::Path => {
            log::info!("{}", settings::settings_path().display());
            Ok(())
        }
        ConfigAction::SetSource { document, source } => {
            let kind = DocumentKind::from(document);
            let mut settings = settings;
            settings.set_source(kind, Some(source.to_string()));
            save(&settings)?;
            log::info!("Saved {} source: {}", kind_name(kind), source);
            Ok(())
        }
        ConfigAction::ClearSource { document } => {
            let kind = DocumentKind::from(document);
            let mut settings = settings;
            settings.set_source(kind, None);
            save(&settings)?;
            log::info!("Cleared {} source", kind_name(kind));
            Ok(())
        }
        ConfigAction::SetFilters {
            platforms,
            show_content_warnings,
        } => {
            let mut settings = settings;
            if let Some(platforms) = platforms {
                settings.filters.linux = platforms.contains(&StorePlatform::Linux);
                settings.filters.macos = platforms.contains(&StorePlatform::MacOs);
                settings.filters.windows = platforms.contains(&StorePlatform::Windows);
            }
            if let Some(show) = show_content_warnings {
                settings.filters.show_content_warnings = show;
            }
            save(&settings)?;
            log::info!("Saved default filters");
            Ok(())
        }
    }
}

fn kind_name(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Config => "config",
        DocumentKind::Catalog => "catalog",
    }
}

fn save(settings: &Settings) -> Result<(), CliError> {
    settings::save_settings(settings).map_err(|e| {
        CliError::other(format!(
            "Failed to save settings to {}: {}",
            settings::settings_path().display(),
            e
        ))
    })
}

/// Show the settings file and the sources this invocation would use.
fn run_config_show(sources: &Sources, settings: &Settings) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Prize List Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    for (kind, resolved) in [
        (DocumentKind::Config, &sources.config),
        (DocumentKind::Catalog, &sources.catalog),
    ] {
        let origin = if settings.resolve_source(kind, None) != *resolved {
            "command line"
        } else if settings.source(kind).is_some() {
            "settings"
        } else {
            "default"
        };
        log::info!(
            "  {:<8} {} {}",
            format!("{}:", kind_name(kind)),
            resolved.if_supports_color(Stdout, |t| t.cyan()),
            format!("({})", origin).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let filters = settings.filters.to_filter_state();
    let enabled: Vec<&str> = StorePlatform::all()
        .iter()
        .filter(|&&p| filters.platform_enabled(p))
        .map(|p| p.display_name())
        .collect();
    log::info!(
        "  Platforms: {}",
        if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled.join(", ")
        }
    );
    log::info!(
        "  Content warnings: {}",
        if filters.show_content_warnings {
            "shown"
        } else {
            "hidden"
        }
    );

    if let Some(contents) = settings::load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}
