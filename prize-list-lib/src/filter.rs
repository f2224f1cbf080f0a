//! Row visibility from the visitor's search text and toggles.

use serde::{Deserialize, Serialize};

use prize_list_core::StorePlatform;

use crate::normalize::Row;

/// Everything the visitor controls that affects which rows are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub linux: bool,
    pub macos: bool,
    pub windows: bool,
    pub search: String,
    pub show_content_warnings: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            linux: true,
            macos: true,
            windows: true,
            search: String::new(),
            show_content_warnings: false,
        }
    }
}

impl FilterState {
    pub fn platform_enabled(&self, platform: StorePlatform) -> bool {
        match platform {
            StorePlatform::Linux => self.linux,
            StorePlatform::MacOs => self.macos,
            StorePlatform::Windows => self.windows,
        }
    }

    pub fn set_platform(&mut self, platform: StorePlatform, enabled: bool) {
        match platform {
            StorePlatform::Linux => self.linux = enabled,
            StorePlatform::MacOs => self.macos = enabled,
            StorePlatform::Windows => self.windows = enabled,
        }
    }

    /// Enable exactly the given platforms.
    pub fn only_platforms(&mut self, platforms: &[StorePlatform]) {
        for &platform in StorePlatform::all() {
            self.set_platform(platform, platforms.contains(&platform));
        }
    }
}

/// Split the search box into lowercase words on single spaces.
///
/// An empty search yields one empty word, which matches everything.
pub fn search_words(search: &str) -> Vec<String> {
    search.to_lowercase().split(' ').map(str::to_string).collect()
}

/// Whether a row should be shown, checked in a fixed order:
///
/// 1. A fragment addressing the row's slug always shows it.
/// 2. Rows with content warnings are hidden unless the toggle is on.
/// 3. Rows with platforms need at least one enabled platform.
/// 4. Every search word must occur in the row's searchable text.
pub fn matches_filters(row: &Row, search_words: &[String], fragment: &str, filters: &FilterState) -> bool {
    if fragment
        .strip_prefix('#')
        .is_some_and(|slug| !slug.is_empty() && slug == row.slug)
    {
        return true;
    }

    if row.has_content_warnings() && !filters.show_content_warnings {
        return false;
    }

    let has_valid_platform =
        row.platforms.is_empty() || row.store_platforms().any(|p| filters.platform_enabled(p));
    if !has_valid_platform {
        return false;
    }

    search_words
        .iter()
        .all(|word| row.searchable_text.contains(word.as_str()))
}

/// Recompute `visible` for every row. Returns the number of visible rows.
pub fn apply_filters(rows: &mut [Row], filters: &FilterState, fragment: &str) -> usize {
    let words = search_words(&filters.search);
    let mut visible = 0;
    for row in rows.iter_mut() {
        row.visible = matches_filters(row, &words, fragment, filters);
        if row.visible {
            visible += 1;
        }
    }
    log::debug!(
        "Filter pass: {}/{} rows visible (search {:?}, fragment {:?})",
        visible,
        rows.len(),
        filters.search,
        fragment
    );
    visible
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
