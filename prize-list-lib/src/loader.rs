//! Fetching the config and catalog documents.
//!
//! Both documents are requested concurrently and both must arrive before
//! anything is normalized. There is no partial state: any failure aborts
//! the whole load.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use prize_list_catalog::{CatalogEntry, SiteConfig, parse_catalog, parse_config, validate_config};

use crate::error::LoadError;
use crate::filter::FilterState;
use crate::state::AppState;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Where a document comes from: a local file or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Url(String),
}

impl DocumentSource {
    /// Built-in config location, relative to the working directory.
    pub fn default_config() -> Self {
        Self::Path(PathBuf::from("config/config.json"))
    }

    /// Built-in catalog location, relative to the working directory.
    pub fn default_catalog() -> Self {
        Self::Path(PathBuf::from("config/games.json"))
    }

    /// Read the document body as text.
    async fn fetch_text(&self, http: &reqwest::Client) -> Result<String, LoadError> {
        match self {
            Self::Path(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::io(path.display().to_string(), e)),
            Self::Url(url) => {
                let response = http
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(|e| LoadError::http(url, e))?;
                response.text().await.map_err(|e| LoadError::http(url, e))
            }
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

impl FromStr for DocumentSource {
    type Err = LoadError;

    /// `http://` and `https://` strings are URLs, anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LoadError::EmptySource);
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(s.to_string()))
        } else {
            Ok(Self::Path(PathBuf::from(s)))
        }
    }
}

/// Load and parse both documents concurrently, then validate the config.
pub async fn load_documents(
    config: &DocumentSource,
    catalog: &DocumentSource,
) -> Result<(SiteConfig, Vec<CatalogEntry>), LoadError> {
    let http = reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| LoadError::http(config.to_string(), e))?;

    log::debug!("Loading config from {} and catalog from {}", config, catalog);
    let (config_text, catalog_text) =
        tokio::try_join!(config.fetch_text(&http), catalog.fetch_text(&http))?;

    let site_config = parse_config(&config_text, &config.to_string())?;
    for warning in validate_config(&site_config)? {
        log::warn!("Config: {}", warning);
    }
    let entries = parse_catalog(&catalog_text, &catalog.to_string())?;

    Ok((site_config, entries))
}

/// Load both documents and build the initial application state.
pub async fn load_state(
    config: &DocumentSource,
    catalog: &DocumentSource,
    filters: FilterState,
    fragment: &str,
) -> Result<AppState, LoadError> {
    let (site_config, entries) = load_documents(config, catalog).await?;
    let state = AppState::new(site_config, &entries, filters, fragment)?;
    log::debug!(
        "Loaded {} rows from {} entries ({} visible)",
        state.rows().len(),
        entries.len(),
        state.visible_count()
    );
    Ok(state)
}
