//! Catalog normalization: one row per key, with derived display fields.

use std::collections::HashMap;

use serde::Serialize;

use prize_list_catalog::{CatalogEntry, CatalogError, ClaimedIds, PrizeGroup, SiteConfig};
use prize_list_core::{StorePlatform, slug_base, summarize_content_warnings, truncate_chars};

/// Descriptions longer than this get a truncated preview.
pub const MAX_DESCRIPTION_LEN: usize = 150;

const STEAM_APP_URL: &str = "https://store.steampowered.com/app/";
const STEAM_SUB_URL: &str = "https://store.steampowered.com/sub/";

/// A single redeemable key with everything the view needs to display it.
///
/// Rows own all of their data; siblings expanded from the same entry share
/// nothing. Only `visible` changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub app_id: Option<i64>,
    pub bundle_id: Option<i64>,
    pub override_store_page_url: Option<String>,
    pub price: f64,
    pub platforms: Vec<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub description: Option<String>,
    pub release_date: String,
    pub content_warnings: Vec<i64>,
    pub searchable_text: String,
    pub truncated_description: Option<String>,
    pub content_warning_text: String,
    pub url: Option<String>,
    pub prize_group: String,
    pub claimed: bool,
    pub visible: bool,
}

impl Row {
    pub fn has_content_warnings(&self) -> bool {
        !self.content_warnings.is_empty()
    }

    /// Declared platforms this crate recognizes, in declaration order.
    pub fn store_platforms(&self) -> impl Iterator<Item = StorePlatform> + '_ {
        self.platforms.iter().filter_map(|p| p.parse().ok())
    }
}

/// Expand, derive, and tier every catalog entry.
///
/// Rows come out in catalog order; call [`crate::sort_rows`] for display
/// order. Fails only if some price matches no tier, which validated configs
/// rule out.
pub fn normalize(entries: &[CatalogEntry], config: &SiteConfig) -> Result<Vec<Row>, CatalogError> {
    let mut slugs = SlugAllocator::default();
    let mut claims = ClaimLedger::new(config.claimed.as_ref());
    let mut rows = Vec::with_capacity(entries.iter().map(CatalogEntry::row_count).sum());

    for (entry, title) in expand_entries(entries) {
        let prize_group = assign_prize_group(&config.prize_groups, entry.price)
            .ok_or(CatalogError::NoCatchAllTier)?
            .key
            .clone();

        let mut row = Row {
            slug: slugs.allocate(&title),
            searchable_text: searchable_text(&title, entry),
            truncated_description: entry
                .description
                .as_deref()
                .and_then(|d| truncate_chars(d, MAX_DESCRIPTION_LEN)),
            content_warning_text: summarize_content_warnings(&entry.content_warnings),
            url: store_url(entry),
            prize_group,
            claimed: false,
            visible: true,
            title,
            item_type: entry.item_type.clone(),
            app_id: entry.app_id,
            bundle_id: entry.bundle_id,
            override_store_page_url: entry.override_store_page_url.clone(),
            price: entry.price,
            platforms: entry.platforms.clone(),
            categories: entry.categories.clone(),
            genres: entry.genres.clone(),
            description: entry.description.clone(),
            release_date: entry.release_date.clone(),
            content_warnings: entry.content_warnings.clone(),
        };
        row.claimed = claims.claim(&row);
        rows.push(row);
    }

    log::debug!(
        "Normalized {} catalog entries into {} rows",
        entries.len(),
        rows.len()
    );
    Ok(rows)
}

/// Pair each entry with the titles it expands into (one per key).
fn expand_entries(entries: &[CatalogEntry]) -> impl Iterator<Item = (&CatalogEntry, String)> {
    entries.iter().flat_map(|entry| {
        if entry.keys.is_empty() {
            log::warn!(
                "Catalog entry without keys (appId {:?}, bundleId {:?}); rendering one untitled row",
                entry.app_id,
                entry.bundle_id
            );
            vec![(entry, String::new())]
        } else {
            entry.keys.iter().map(|key| (entry, key.clone())).collect()
        }
    })
}

/// Hands out unique slugs: the first use of a base slug is bare, repeats
/// get `_2`, `_3`, ... counted per base.
#[derive(Debug, Default)]
pub(crate) struct SlugAllocator {
    used: HashMap<String, u32>,
}

impl SlugAllocator {
    pub(crate) fn allocate(&mut self, title: &str) -> String {
        let base = slug_base(title);
        match self.used.get_mut(&base) {
            Some(count) => {
                *count += 1;
                format!("{}_{}", base, count)
            }
            None => {
                self.used.insert(base.clone(), 1);
                base
            }
        }
    }
}

/// Lowercased haystack for free-text search.
pub(crate) fn searchable_text(title: &str, entry: &CatalogEntry) -> String {
    let mut parts: Vec<&str> = vec![
        title,
        entry.item_type.as_deref().unwrap_or(""),
        entry.description.as_deref().unwrap_or(""),
    ];
    parts.extend(entry.categories.iter().map(String::as_str));
    parts.extend(entry.genres.iter().map(String::as_str));
    parts.push(&entry.release_date);
    parts.join(" ").to_lowercase()
}

/// Store link: explicit override, then Steam app, then Steam package.
pub(crate) fn store_url(entry: &CatalogEntry) -> Option<String> {
    if let Some(url) = entry.override_store_page_url.as_deref().filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }
    if let Some(app_id) = entry.app_id.filter(|&id| id > 0) {
        return Some(format!("{}{}", STEAM_APP_URL, app_id));
    }
    entry
        .bundle_id
        .filter(|&id| id > 0)
        .map(|bundle_id| format!("{}{}", STEAM_SUB_URL, bundle_id))
}

/// First tier, in declared order, that accepts `price`.
pub(crate) fn assign_prize_group(groups: &[PrizeGroup], price: f64) -> Option<&PrizeGroup> {
    groups.iter().find(|g| g.accepts(price))
}

/// Remaining claimed ids; each successful claim consumes one entry.
struct ClaimLedger {
    app_ids: Vec<i64>,
    bundle_ids: Vec<i64>,
}

impl ClaimLedger {
    fn new(claimed: Option<&ClaimedIds>) -> Self {
        let claimed = claimed.cloned().unwrap_or_default();
        Self {
            app_ids: claimed.app_ids,
            bundle_ids: claimed.bundle_ids,
        }
    }

    /// The app id takes precedence when a row has both ids.
    fn claim(&mut self, row: &Row) -> bool {
        let (list, id) = match (row.app_id, row.bundle_id) {
            (Some(app_id), _) if app_id > 0 => (&mut self.app_ids, app_id),
            (_, Some(bundle_id)) if bundle_id > 0 => (&mut self.bundle_ids, bundle_id),
            _ => return false,
        };
        match list.iter().position(|&claimed| claimed == id) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
