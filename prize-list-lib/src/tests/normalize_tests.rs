use super::*;

fn entry(keys: &[&str], price: f64) -> CatalogEntry {
    CatalogEntry {
        keys: keys.iter().map(|k| k.to_string()).collect(),
        price,
        ..Default::default()
    }
}

fn tiers() -> SiteConfig {
    SiteConfig {
        prize_groups: vec![
            PrizeGroup::new("a_premium", Some(20.0)),
            PrizeGroup::new("b_standard", Some(5.0)),
            PrizeGroup::new("c_other", None),
        ],
        claimed: None,
    }
}

#[test]
fn single_key_becomes_one_row() {
    let rows = normalize(&[entry(&["Portal"], 10.0)], &tiers()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Portal");
    assert_eq!(rows[0].slug, "portal");
}

#[test]
fn multi_key_entry_expands_per_key() {
    let entries = [entry(&["Alpha", "Beta", "Gamma"], 1.0), entry(&["Delta"], 1.0)];
    let rows = normalize(&entries, &tiers()).unwrap();
    let expected: usize = entries.iter().map(CatalogEntry::row_count).sum();
    assert_eq!(rows.len(), expected);
    let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma", "Delta"]);
}

#[test]
fn entry_without_keys_still_yields_a_row() {
    let rows = normalize(&[entry(&[], 1.0)], &tiers()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "");
}

#[test]
fn sibling_rows_do_not_share_state() {
    let mut source = entry(&["One", "Two"], 3.0);
    source.categories = vec!["Co-op".to_string()];
    let mut rows = normalize(&[source], &tiers()).unwrap();

    rows[0].categories.push("Changed".to_string());
    rows[0].visible = false;

    assert_eq!(rows[1].categories, vec!["Co-op"]);
    assert!(rows[1].visible);
}

#[test]
fn repeated_slugs_get_counter_suffixes() {
    let entries = [
        entry(&["Half-Life", "Half Life", "HALF LIFE!"], 1.0),
        entry(&["Other"], 1.0),
        entry(&["half.life"], 1.0),
    ];
    let rows = normalize(&entries, &tiers()).unwrap();
    let slugs: Vec<&str> = rows.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["halflife", "halflife_2", "halflife_3", "other", "halflife_4"]);
}

#[test]
fn slug_counters_are_independent_per_base() {
    let rows = normalize(&[entry(&["A", "B", "A", "B", "A"], 1.0)], &tiers()).unwrap();
    let slugs: Vec<&str> = rows.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(slugs, vec!["a", "b", "a_2", "b_2", "a_3"]);
}

#[test]
fn slugs_are_unique() {
    let keys: Vec<String> = (0..50).map(|i| format!("Game {}", i % 7)).collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    let rows = normalize(&[entry(&keys, 1.0)], &tiers()).unwrap();
    let unique: std::collections::HashSet<&str> = rows.iter().map(|r| r.slug.as_str()).collect();
    assert_eq!(unique.len(), rows.len());
}

#[test]
fn searchable_text_joins_fields_lowercased() {
    let mut source = entry(&["Return of Obra Studios"], 1.0);
    source.item_type = Some("Game".to_string());
    source.description = Some("Insurance ADVENTURE".to_string());
    source.categories = vec!["Single-player".to_string()];
    source.genres = vec!["Puzzle".to_string(), "Mystery".to_string()];
    source.release_date = "18 Oct, 2018".to_string();

    let rows = normalize(&[source], &tiers()).unwrap();
    assert_eq!(
        rows[0].searchable_text,
        "return of obra studios game insurance adventure single-player puzzle mystery 18 oct, 2018"
    );
}

#[test]
fn searchable_text_tolerates_absent_fields() {
    let rows = normalize(&[entry(&["Solo"], 1.0)], &tiers()).unwrap();
    assert_eq!(rows[0].searchable_text, "solo   ");
}

#[test]
fn description_truncation_boundary() {
    let mut exact = entry(&["Exact"], 1.0);
    exact.description = Some("d".repeat(MAX_DESCRIPTION_LEN));
    let mut over = entry(&["Over"], 1.0);
    over.description = Some("d".repeat(MAX_DESCRIPTION_LEN + 1));
    let none = entry(&["None"], 1.0);

    let rows = normalize(&[exact, over, none], &tiers()).unwrap();
    assert_eq!(rows[0].truncated_description, None);
    assert_eq!(
        rows[1].truncated_description,
        Some(format!("{}…", "d".repeat(MAX_DESCRIPTION_LEN)))
    );
    assert_eq!(rows[2].truncated_description, None);
}

#[test]
fn url_priority() {
    let mut all = entry(&["All"], 1.0);
    all.override_store_page_url = Some("https://example.com/all".to_string());
    all.app_id = Some(10);
    all.bundle_id = Some(20);

    let mut app = entry(&["App"], 1.0);
    app.app_id = Some(10);
    app.bundle_id = Some(20);

    let mut bundle = entry(&["Bundle"], 1.0);
    bundle.bundle_id = Some(20);

    let none = entry(&["None"], 1.0);

    let rows = normalize(&[all, app, bundle, none], &tiers()).unwrap();
    assert_eq!(rows[0].url.as_deref(), Some("https://example.com/all"));
    assert_eq!(rows[1].url.as_deref(), Some("https://store.steampowered.com/app/10"));
    assert_eq!(rows[2].url.as_deref(), Some("https://store.steampowered.com/sub/20"));
    assert_eq!(rows[3].url, None);
}

#[test]
fn prize_group_takes_first_matching_tier() {
    let entries = [
        entry(&["Expensive"], 25.0),
        entry(&["Boundary"], 20.0),
        entry(&["Middle"], 7.5),
        entry(&["Cheap"], 0.99),
        entry(&["Free"], 0.0),
    ];
    let rows = normalize(&entries, &tiers()).unwrap();
    let groups: Vec<&str> = rows.iter().map(|r| r.prize_group.as_str()).collect();
    assert_eq!(groups, vec!["a_premium", "a_premium", "b_standard", "c_other", "c_other"]);
}

#[test]
fn missing_catch_all_is_an_error() {
    let config = SiteConfig {
        prize_groups: vec![PrizeGroup::new("premium", Some(20.0))],
        claimed: None,
    };
    let result = normalize(&[entry(&["Cheap"], 1.0)], &config);
    assert!(matches!(result, Err(CatalogError::NoCatchAllTier)));
}

#[test]
fn content_warning_text_is_derived() {
    let mut source = entry(&["Gory"], 1.0);
    source.content_warnings = vec![3, 1, 2];
    let rows = normalize(&[source, entry(&["Clean"], 1.0)], &tiers()).unwrap();
    assert_eq!(
        rows[0].content_warning_text,
        "Adult-only sexual content, frequent violence or gore."
    );
    assert!(rows[0].has_content_warnings());
    assert_eq!(rows[1].content_warning_text, "");
}

#[test]
fn claimed_ids_are_consumed_once() {
    let mut config = tiers();
    config.claimed = Some(ClaimedIds {
        app_ids: vec![620],
        bundle_ids: vec![99, 99],
    });

    let mut portal = entry(&["Portal 2 (key 1)", "Portal 2 (key 2)"], 10.0);
    portal.app_id = Some(620);
    let mut bundle = entry(&["Bundle 1", "Bundle 2", "Bundle 3"], 10.0);
    bundle.bundle_id = Some(99);

    let rows = normalize(&[portal, bundle], &config).unwrap();
    let claimed: Vec<bool> = rows.iter().map(|r| r.claimed).collect();
    assert_eq!(claimed, vec![true, false, true, true, false]);
}

#[test]
fn app_id_takes_precedence_for_claims() {
    let mut config = tiers();
    config.claimed = Some(ClaimedIds {
        app_ids: vec![],
        bundle_ids: vec![5],
    });
    let mut both = entry(&["Both"], 1.0);
    both.app_id = Some(1);
    both.bundle_id = Some(5);

    let rows = normalize(&[both], &config).unwrap();
    assert!(!rows[0].claimed);
}

#[test]
fn store_platforms_skip_unknown_names() {
    let mut source = entry(&["Ported"], 1.0);
    source.platforms = vec!["Windows".to_string(), "Amiga".to_string(), "Linux".to_string()];
    let rows = normalize(&[source], &tiers()).unwrap();
    let platforms: Vec<StorePlatform> = rows[0].store_platforms().collect();
    assert_eq!(platforms, vec![StorePlatform::Windows, StorePlatform::Linux]);
}
