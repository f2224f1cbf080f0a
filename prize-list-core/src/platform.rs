use serde::{Deserialize, Serialize};

/// Store platforms a catalog row can declare and a visitor can toggle.
///
/// Catalog documents carry platforms as free-form strings ("Linux",
/// "macOS", "Windows"); this enum is the closed set the filter engine
/// understands. Strings that don't parse never enable a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorePlatform {
    Linux,
    #[serde(rename = "macos")]
    MacOs,
    Windows,
}

/// All platform variants in toggle order.
const ALL_PLATFORMS: &[StorePlatform] = &[
    StorePlatform::Linux,
    StorePlatform::MacOs,
    StorePlatform::Windows,
];

impl StorePlatform {
    /// Canonical short name used for CLI arguments and settings keys.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }

    /// Label shown next to the toggle and in the platform column.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Linux => &["linux"],
            Self::MacOs => &["macos", "mac", "osx"],
            Self::Windows => &["windows", "win"],
        }
    }

    /// All 3 platform variants.
    pub fn all() -> &'static [StorePlatform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for StorePlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `StorePlatform`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown platform: '{0}'")]
pub struct PlatformParseError(pub String);

impl std::str::FromStr for StorePlatform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_PLATFORMS
            .iter()
            .copied()
            .find(|platform| platform.aliases().contains(&lower.as_str()))
            .ok_or_else(|| PlatformParseError(s.to_string()))
    }
}
