//! Prize list pipeline: normalization, sorting, filtering, and deep links.
//!
//! Build an [`AppState`] from the two input documents (or let
//! [`load_state`] fetch them), then feed it [`FilterEvent`]s as the visitor
//! types and toggles. Every event recomputes row visibility from scratch.

pub mod deep_link;
pub mod error;
pub mod filter;
pub mod loader;
pub mod normalize;
pub mod settings;
pub mod sort;
pub mod state;

pub use deep_link::{DeepLink, normalize_fragment, resolve_deep_link};
pub use error::LoadError;
pub use filter::{FilterState, apply_filters, matches_filters, search_words};
pub use loader::{DocumentSource, load_documents, load_state};
pub use normalize::{MAX_DESCRIPTION_LEN, Row, normalize};
pub use sort::sort_rows;
pub use state::{AppState, FilterEvent, GroupView};

// Re-export the input model so frontends only need this crate.
pub use prize_list_catalog::{
    CatalogEntry, CatalogError, ConfigWarning, PrizeGroup, SiteConfig, validate_config,
};
pub use prize_list_core::{ContentWarning, StorePlatform, slug_base};
