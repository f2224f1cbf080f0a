use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use prize_list_lib::{LoadError, PrizeGroup, normalize, slug_base, validate_config};

use crate::CliError;

use super::{Sources, load_raw_documents};

/// Load both documents, normalize them, and report what was found.
///
/// Fatal problems surface as errors from loading. Config warnings are
/// logged during the load and counted again here for the summary.
pub(crate) fn run_validate(sources: &Sources) -> Result<(), CliError> {
    let (config, entries) = load_raw_documents(sources)?;
    let warnings = validate_config(&config).map_err(LoadError::from)?;
    let rows = normalize(&entries, &config).map_err(LoadError::from)?;

    let mut per_tier: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &rows {
        *per_tier.entry(row.prize_group.as_str()).or_default() += 1;
    }
    let renamed = rows.iter().filter(|r| r.slug != slug_base(&r.title)).count();
    let claimed = rows.iter().filter(|r| r.claimed).count();
    let untitled = entries.iter().filter(|e| e.keys.is_empty()).count();

    log::info!("Config:  {}", sources.config);
    log::info!("Catalog: {}", sources.catalog);
    log::info!("");
    log::info!(
        "{} entries expanded to {} rows",
        entries.len().if_supports_color(Stdout, |t| t.bold()),
        rows.len().if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("Prize groups:");
    for group in &config.prize_groups {
        let floor = tier_floor(group);
        let hidden = if group.visible { "" } else { " (hidden when empty)" };
        log::info!(
            "  {:<20} {:<12} {:>5} rows{}",
            group.key,
            floor,
            per_tier.get(group.key.as_str()).copied().unwrap_or(0),
            hidden
        );
    }
    if renamed > 0 {
        log::info!("{} duplicate titles got numbered slugs", renamed);
    }
    if claimed > 0 {
        log::info!("{} rows are marked claimed", claimed);
    }
    if untitled > 0 {
        log::warn!("{} catalog entries have no keys", untitled);
    }

    if warnings.is_empty() {
        log::info!("{}", "OK".if_supports_color(Stdout, |t| t.green()));
    } else {
        log::info!(
            "{}",
            format!("OK with {} warning(s)", warnings.len()).if_supports_color(Stdout, |t| t.yellow())
        );
    }
    Ok(())
}

/// Price floor column: the minimum price, or "catch-all" for a tier that
/// accepts every price.
fn tier_floor(group: &PrizeGroup) -> String {
    match group.min_price {
        Some(price) if !group.is_catch_all() => format!(">= ${:.2}", price),
        _ => "catch-all".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_absent_floors_are_catch_all() {
        assert_eq!(tier_floor(&PrizeGroup::new("rest", None)), "catch-all");
        assert_eq!(tier_floor(&PrizeGroup::new("rest", Some(0.0))), "catch-all");
    }

    #[test]
    fn positive_floor_shows_price() {
        assert_eq!(tier_floor(&PrizeGroup::new("top", Some(25.0))), ">= $25.00");
    }
}
