//! Load-time checks on the site config.
//!
//! Tier assignment walks the tiers in declared order and takes the first
//! match, so it is only total when a catch-all tier exists. Configs that
//! would leave rows without a tier are rejected here instead of surfacing
//! later as an inconsistent sort.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::types::SiteConfig;

/// A config oddity that does not prevent rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// A catch-all tier sits before other tiers, which can never match.
    UnreachableTiers {
        catch_all: String,
        unreachable: Vec<String>,
    },
    /// A claimed id is listed more than once (claims that many rows).
    RepeatedClaim { kind: &'static str, id: i64 },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnreachableTiers {
                catch_all,
                unreachable,
            } => write!(
                f,
                "catch-all prize group '{}' precedes {}, which can never match",
                catch_all,
                unreachable.join(", ")
            ),
            Self::RepeatedClaim { kind, id } => {
                write!(f, "claimed {} {} is listed more than once", kind, id)
            }
        }
    }
}

/// Validate a config, returning non-fatal warnings on success.
///
/// Warnings are returned, not logged; the caller decides how to report them.
pub fn validate_config(config: &SiteConfig) -> Result<Vec<ConfigWarning>, CatalogError> {
    if config.prize_groups.is_empty() {
        return Err(CatalogError::NoPrizeGroups);
    }

    let mut keys = HashSet::new();
    for group in &config.prize_groups {
        if !keys.insert(group.key.as_str()) {
            return Err(CatalogError::DuplicateTier(group.key.clone()));
        }
        if let Some(price) = group.min_price
            && price < 0.0
        {
            return Err(CatalogError::NegativePrice {
                key: group.key.clone(),
                price,
            });
        }
    }

    let catch_all = config
        .prize_groups
        .iter()
        .position(|g| g.is_catch_all())
        .ok_or(CatalogError::NoCatchAllTier)?;

    let mut warnings = Vec::new();
    if catch_all + 1 < config.prize_groups.len() {
        warnings.push(ConfigWarning::UnreachableTiers {
            catch_all: config.prize_groups[catch_all].key.clone(),
            unreachable: config.prize_groups[catch_all + 1..]
                .iter()
                .map(|g| g.key.clone())
                .collect(),
        });
    }

    if let Some(claimed) = &config.claimed {
        for (kind, ids) in [("appId", &claimed.app_ids), ("bundleId", &claimed.bundle_ids)] {
            let mut seen = HashSet::new();
            for &id in ids {
                if !seen.insert(id) {
                    warnings.push(ConfigWarning::RepeatedClaim { kind, id });
                }
            }
        }
    }

    Ok(warnings)
}
