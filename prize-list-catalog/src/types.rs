//! Data model types for the two input documents.
//!
//! Field names follow the camelCase JSON the documents are published in.

use serde::{Deserialize, Deserializer, Serialize};

// ── Catalog ─────────────────────────────────────────────────────────────────

/// One entry of the catalog document: metadata shared by one or more keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Redeemable keys sharing this metadata. Each becomes its own row.
    #[serde(default, deserialize_with = "null_as_default")]
    pub keys: Vec<String>,
    /// Item type ("game", "DLC", "soundtrack", ...).
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub app_id: Option<i64>,
    #[serde(default)]
    pub bundle_id: Option<i64>,
    #[serde(default)]
    pub override_store_page_url: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platforms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    /// Mature-content codes; absent and empty mean the same thing.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_warnings: Vec<i64>,
}

impl CatalogEntry {
    /// Number of rows this entry expands into.
    pub fn row_count(&self) -> usize {
        self.keys.len().max(1)
    }
}

// ── Site config ─────────────────────────────────────────────────────────────

/// A price tier used to group and sort rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrizeGroup {
    pub key: String,
    /// Minimum price for this tier. Zero or absent makes it the catch-all.
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Whether the tier heading is shown even when it has no visible rows.
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl PrizeGroup {
    pub fn new(key: impl Into<String>, min_price: Option<f64>) -> Self {
        Self {
            key: key.into(),
            min_price,
            visible: true,
        }
    }

    /// True when the tier accepts any price.
    pub fn is_catch_all(&self) -> bool {
        self.min_price.is_none_or(|p| p == 0.0)
    }

    /// True when a row with `price` belongs in this tier.
    pub fn accepts(&self, price: f64) -> bool {
        match self.min_price {
            None => true,
            Some(min) => min == 0.0 || min <= price,
        }
    }
}

/// Store ids already given away; each listed id claims one row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedIds {
    #[serde(default, deserialize_with = "null_as_default")]
    pub app_ids: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bundle_ids: Vec<i64>,
}

/// The general config document, canonical (list-of-tiers) schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Price tiers in evaluation order; the catch-all belongs last.
    pub prize_groups: Vec<PrizeGroup>,
    #[serde(default)]
    pub claimed: Option<ClaimedIds>,
}

fn default_true() -> bool {
    true
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
