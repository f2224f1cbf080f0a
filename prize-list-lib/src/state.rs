//! Application state and the events that mutate it.

use prize_list_catalog::{CatalogEntry, CatalogError, PrizeGroup, SiteConfig};
use prize_list_core::StorePlatform;

use crate::deep_link::{DeepLink, normalize_fragment, resolve_deep_link};
use crate::filter::{FilterState, apply_filters};
use crate::normalize::{Row, normalize};
use crate::sort::sort_rows;

/// A visitor action that requires a filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    SearchChanged(String),
    PlatformToggled(StorePlatform, bool),
    ContentWarningsToggled(bool),
    /// The URL fragment changed (navigation, link click, back button).
    FragmentChanged(String),
}

/// One tier as the view renders it.
#[derive(Debug)]
pub struct GroupView<'a> {
    pub group: &'a PrizeGroup,
    pub rows: Vec<&'a Row>,
}

/// Everything the view renders: config, rows in display order, the current
/// filters and fragment.
#[derive(Debug, Clone)]
pub struct AppState {
    config: SiteConfig,
    rows: Vec<Row>,
    filters: FilterState,
    fragment: String,
}

impl AppState {
    /// Normalize and sort the catalog, then run the initial filter pass.
    pub fn new(
        config: SiteConfig,
        entries: &[CatalogEntry],
        filters: FilterState,
        fragment: &str,
    ) -> Result<Self, CatalogError> {
        let mut rows = normalize(entries, &config)?;
        sort_rows(&mut rows);
        let mut state = Self {
            config,
            rows,
            filters,
            fragment: normalize_fragment(fragment),
        };
        state.refresh();
        Ok(state)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// All rows in display order, hidden ones included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|r| r.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    pub fn row_by_slug(&self, slug: &str) -> Option<&Row> {
        let slug = slug.trim_start_matches('#');
        self.rows.iter().find(|r| r.slug == slug)
    }

    /// The row addressed by the current fragment, if any.
    pub fn deep_link(&self) -> Option<DeepLink> {
        resolve_deep_link(&self.rows, &self.fragment)
    }

    /// Apply an event, rerun the filters, and return the deep-link target
    /// the view should scroll to.
    pub fn apply(&mut self, event: FilterEvent) -> Option<DeepLink> {
        log::debug!("Applying {:?}", event);
        match event {
            FilterEvent::SearchChanged(search) => self.filters.search = search,
            FilterEvent::PlatformToggled(platform, enabled) => {
                self.filters.set_platform(platform, enabled)
            }
            FilterEvent::ContentWarningsToggled(show) => self.filters.show_content_warnings = show,
            FilterEvent::FragmentChanged(fragment) => self.fragment = normalize_fragment(&fragment),
        }
        self.refresh()
    }

    /// Recompute visibility for every row.
    pub fn refresh(&mut self) -> Option<DeepLink> {
        apply_filters(&mut self.rows, &self.filters, &self.fragment);
        let link = self.deep_link();
        if link.is_none() && !self.fragment.is_empty() {
            log::debug!("Fragment {} does not address any row", self.fragment);
        }
        link
    }

    /// Visible rows grouped by tier, in tier declaration order.
    ///
    /// A tier with no visible rows is still listed when its `visible` hint
    /// is set, so the view can render an empty heading.
    pub fn groups(&self) -> Vec<GroupView<'_>> {
        self.config
            .prize_groups
            .iter()
            .map(|group| GroupView {
                group,
                rows: self
                    .visible_rows()
                    .filter(|r| r.prize_group == group.key)
                    .collect(),
            })
            .filter(|view| view.group.visible || !view.rows.is_empty())
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
