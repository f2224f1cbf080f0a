use super::*;
use crate::normalize::normalize;
use prize_list_catalog::{CatalogEntry, PrizeGroup, SiteConfig};

fn row(title: &str, platforms: &[&str], warnings: &[i64]) -> Row {
    let entry = CatalogEntry {
        keys: vec![title.to_string()],
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
        content_warnings: warnings.to_vec(),
        genres: vec!["Puzzle".to_string()],
        ..Default::default()
    };
    let config = SiteConfig {
        prize_groups: vec![PrizeGroup::new("all", None)],
        claimed: None,
    };
    normalize(&[entry], &config).unwrap().remove(0)
}

fn toggles(linux: bool, macos: bool, windows: bool) -> FilterState {
    FilterState {
        linux,
        macos,
        windows,
        ..Default::default()
    }
}

#[test]
fn linux_row_visible_with_linux_enabled() {
    let r = row("Tux Racer", &["Linux"], &[]);
    assert!(matches_filters(&r, &search_words(""), "", &toggles(true, false, false)));
}

#[test]
fn linux_row_hidden_with_linux_disabled() {
    let r = row("Tux Racer", &["Linux"], &[]);
    assert!(!matches_filters(&r, &search_words(""), "", &toggles(false, false, false)));
    assert!(!matches_filters(&r, &search_words(""), "", &toggles(false, true, true)));
}

#[test]
fn any_enabled_platform_is_enough() {
    let r = row("Multi", &["Linux", "Windows"], &[]);
    assert!(matches_filters(&r, &search_words(""), "", &toggles(true, false, false)));
    assert!(matches_filters(&r, &search_words(""), "", &toggles(false, false, true)));
    assert!(!matches_filters(&r, &search_words(""), "", &toggles(false, true, false)));
}

#[test]
fn rows_without_platforms_ignore_toggles() {
    let r = row("Platformless", &[], &[]);
    assert!(matches_filters(&r, &search_words(""), "", &toggles(false, false, false)));
}

#[test]
fn unknown_platforms_never_enable_a_row() {
    let r = row("Retro", &["Amiga"], &[]);
    assert!(!matches_filters(&r, &search_words(""), "", &FilterState::default()));
}

#[test]
fn other_store_names_never_enable_a_row() {
    for name in ["PC", "SteamOS", "Mac OS"] {
        let r = row("Elsewhere", &[name], &[]);
        assert!(
            !matches_filters(&r, &search_words(""), "", &FilterState::default()),
            "'{}' should not match any toggle",
            name
        );
    }
}

#[test]
fn content_warnings_hidden_by_default() {
    let r = row("Gory", &[], &[2]);
    let mut filters = FilterState::default();
    assert!(!matches_filters(&r, &search_words(""), "", &filters));
    filters.show_content_warnings = true;
    assert!(matches_filters(&r, &search_words(""), "", &filters));
}

#[test]
fn every_search_word_must_match() {
    let r = row("Return of Obra Studios", &[], &[]);
    let filters = FilterState::default();
    assert!(matches_filters(&r, &search_words("OBRA puzzle"), "", &filters));
    assert!(matches_filters(&r, &search_words("turn"), "", &filters));
    assert!(!matches_filters(&r, &search_words("obra racing"), "", &filters));
}

#[test]
fn empty_search_is_a_single_empty_word() {
    assert_eq!(search_words(""), vec![String::new()]);
    assert_eq!(search_words("A  b"), vec!["a", "", "b"]);
}

#[test]
fn fragment_overrides_every_filter() {
    let r = row("Return of Obra Studios", &["Windows"], &[4]);
    let mut filters = toggles(false, false, false);
    filters.search = "nothing matches this".to_string();

    assert!(!matches_filters(&r, &search_words(&filters.search), "", &filters));
    assert!(matches_filters(
        &r,
        &search_words(&filters.search),
        "#returnofobrastudios",
        &filters
    ));
}

#[test]
fn fragment_must_match_the_whole_slug() {
    let r = row("Obra", &["Windows"], &[]);
    let filters = toggles(false, false, false);
    assert!(!matches_filters(&r, &search_words(""), "#obr", &filters));
    assert!(!matches_filters(&r, &search_words(""), "obra", &filters));
}

#[test]
fn apply_filters_recomputes_from_scratch() {
    let mut rows = vec![
        row("Alpha", &["Linux"], &[]),
        row("Beta", &["Windows"], &[]),
        row("Gamma", &[], &[5]),
    ];
    let mut filters = toggles(true, false, false);
    assert_eq!(apply_filters(&mut rows, &filters, ""), 1);
    assert!(rows[0].visible && !rows[1].visible && !rows[2].visible);

    filters = FilterState {
        show_content_warnings: true,
        ..Default::default()
    };
    assert_eq!(apply_filters(&mut rows, &filters, ""), 3);
    assert!(rows.iter().all(|r| r.visible));
}

#[test]
fn platform_setters() {
    let mut filters = FilterState::default();
    filters.only_platforms(&[StorePlatform::MacOs]);
    assert!(!filters.linux && filters.macos && !filters.windows);
    filters.set_platform(StorePlatform::Linux, true);
    assert!(filters.platform_enabled(StorePlatform::Linux));
}
