use thiserror::Error;

use prize_list_lib::LoadError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Either document failed to load or validate
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// No row has the requested slug
    #[error("No item with slug '{0}'")]
    UnknownSlug(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn unknown_slug(slug: impl Into<String>) -> Self {
        Self::UnknownSlug(slug.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
