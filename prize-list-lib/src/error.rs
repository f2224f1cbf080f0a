use thiserror::Error;

use prize_list_catalog::CatalogError;

/// Errors that abort initialization: either document failed to load, or
/// the loaded documents are unusable.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP request failed or returned an error status
    #[error("HTTP error fetching {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    /// Local document could not be read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Document parsed but failed schema or config validation
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A document source string was empty
    #[error("empty document source")]
    EmptySource,
}

impl LoadError {
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
