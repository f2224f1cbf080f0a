//! Catalog and site-config data model, JSON I/O, and config validation.
//!
//! This crate defines the two documents the prize list is built from
//! without any rendering or filtering logic. Consumers load them here and
//! hand them to `prize-list-lib` for normalization.

pub mod error;
pub mod json;
pub mod types;
pub mod validate;

pub use error::CatalogError;
pub use json::{CONFIG_SCHEMA_VERSION, load_catalog, load_config, parse_catalog, parse_config};
pub use types::*;
pub use validate::{ConfigWarning, validate_config};
