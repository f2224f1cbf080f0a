//! JSON loading for the config and catalog documents.
//!
//! The `origin` argument on the parse functions is only used in error
//! messages: a file path, a URL, or a test label.

use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::types::{CatalogEntry, ClaimedIds, PrizeGroup, SiteConfig};

/// Current config schema version (list of tiers with a visibility hint).
pub const CONFIG_SCHEMA_VERSION: u32 = 2;

/// Config document as published, before the tier shape is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSiteConfig {
    prize_groups: serde_json::Value,
    #[serde(default)]
    claimed: Option<ClaimedIds>,
}

/// Parse the config document from a JSON string.
pub fn parse_config(text: &str, origin: &str) -> Result<SiteConfig, CatalogError> {
    let raw: RawSiteConfig =
        serde_json::from_str(text).map_err(|e| CatalogError::parse(origin, e))?;
    if raw.prize_groups.is_object() {
        return Err(CatalogError::LegacyPrizeGroups {
            path: origin.to_string(),
            expected: CONFIG_SCHEMA_VERSION,
        });
    }
    let prize_groups: Vec<PrizeGroup> =
        serde_json::from_value(raw.prize_groups).map_err(|e| CatalogError::parse(origin, e))?;
    Ok(SiteConfig {
        prize_groups,
        claimed: raw.claimed,
    })
}

/// Parse the catalog document (a JSON list of entries) from a string.
pub fn parse_catalog(text: &str, origin: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(text).map_err(|e| CatalogError::parse(origin, e))?;
    log::debug!("Parsed {} catalog entries from {}", entries.len(), origin);
    Ok(entries)
}

/// Load the config document from a file.
pub fn load_config(path: &Path) -> Result<SiteConfig, CatalogError> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(&origin, e))?;
    parse_config(&text, &origin)
}

/// Load the catalog document from a file.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let origin = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(&origin, e))?;
    parse_catalog(&text, &origin)
}
