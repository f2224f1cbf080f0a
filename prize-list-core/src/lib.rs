//! Shared vocabulary for the prize list: store platforms, content-warning
//! codes, and the string helpers used to derive display fields.

pub mod content_warning;
pub mod platform;
pub mod util;

pub use content_warning::{ContentWarning, summarize_content_warnings};
pub use platform::{PlatformParseError, StorePlatform};
pub use util::{locale_compare, slug_base, truncate_chars};
