use thiserror::Error;

/// Errors raised while reading or validating the input documents.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    /// Config uses the schema version 1 mapping of tier key to minimum price.
    #[error(
        "{path} uses schema version 1 (prizeGroups as a key-to-price mapping); \
         version {expected} expects a list of {{key, minPrice, visible}}"
    )]
    LegacyPrizeGroups { path: String, expected: u32 },

    #[error("config defines no prize groups")]
    NoPrizeGroups,

    /// No tier with zero/absent minPrice, so some rows would have no tier.
    #[error("config has no catch-all prize group (a tier with minPrice 0 or absent)")]
    NoCatchAllTier,

    #[error("duplicate prize group key: {0}")]
    DuplicateTier(String),

    #[error("prize group {key} has negative minPrice {price}")]
    NegativePrice { key: String, price: f64 },
}

impl CatalogError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
