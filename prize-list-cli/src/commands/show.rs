use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use prize_list_lib::settings::Settings;

use crate::CliError;

use super::{Sources, load_app_state};

/// Print every field of one row, ignoring filters.
pub(crate) fn run_show(sources: &Sources, settings: &Settings, slug: &str) -> Result<(), CliError> {
    let state = load_app_state(sources, settings.filters.to_filter_state(), slug)?;
    let row = state
        .row_by_slug(slug)
        .ok_or_else(|| CliError::unknown_slug(slug))?;

    log::info!("{}", row.title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Slug:        #{}", row.slug);
    log::info!("  Tier:        {}", row.prize_group);
    log::info!("  Price:       ${:.2}", row.price);
    if let Some(item_type) = &row.item_type {
        log::info!("  Type:        {}", item_type);
    }
    if !row.platforms.is_empty() {
        log::info!("  Platforms:   {}", row.platforms.join(", "));
    }
    if !row.release_date.is_empty() {
        log::info!("  Released:    {}", row.release_date);
    }
    if !row.genres.is_empty() {
        log::info!("  Genres:      {}", row.genres.join(", "));
    }
    if !row.categories.is_empty() {
        log::info!("  Categories:  {}", row.categories.join(", "));
    }
    if let Some(url) = &row.url {
        log::info!(
            "  Store page:  {}",
            url.if_supports_color(Stdout, |t| t.cyan())
        );
    }
    if !row.content_warning_text.is_empty() {
        log::info!(
            "  Warnings:    {}",
            row.content_warning_text
                .if_supports_color(Stdout, |t| t.red())
        );
    }
    if row.claimed {
        log::info!(
            "  Status:      {}",
            "claimed".if_supports_color(Stdout, |t| t.yellow())
        );
    }
    if let Some(description) = &row.description {
        log::info!("");
        log::info!("{}", description);
    }
    Ok(())
}
