//! URL-fragment addressing of individual rows (`#<slug>`).

use crate::normalize::Row;

/// A fragment resolved against the displayed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    /// Index of the addressed row.
    pub index: usize,
    pub slug: String,
    /// Index of the row to scroll into view: the visible row just before
    /// the target in the same tier, or the target itself when it leads.
    pub anchor: usize,
}

/// Canonical `#slug` form of a user-supplied fragment.
///
/// Accepts the slug with or without the leading `#`; a bare `#` or blank
/// input is the empty fragment.
pub fn normalize_fragment(fragment: &str) -> String {
    let slug = fragment.trim().trim_start_matches('#');
    if slug.is_empty() {
        String::new()
    } else {
        format!("#{}", slug)
    }
}

/// Find the row addressed by `fragment` in display-ordered `rows`.
///
/// Returns `None` for an empty or unresolved fragment.
pub fn resolve_deep_link(rows: &[Row], fragment: &str) -> Option<DeepLink> {
    let slug = fragment.strip_prefix('#').filter(|s| !s.is_empty())?;
    let index = rows.iter().position(|r| r.slug == slug)?;
    let target = &rows[index];

    let anchor = rows[..index]
        .iter()
        .rposition(|r| r.prize_group == target.prize_group && r.visible)
        .unwrap_or(index);

    Some(DeepLink {
        index,
        slug: slug.to_string(),
        anchor,
    })
}
