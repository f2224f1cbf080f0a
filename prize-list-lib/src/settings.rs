//! User settings: default document sources and filter preferences.
//!
//! Stored at `~/.config/prize-list/settings.toml`. Missing or unreadable
//! settings fall back to defaults; they never prevent the list from loading.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::loader::DocumentSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub sources: SourceSettings,
    #[serde(default)]
    pub filters: FilterDefaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SourceSettings {
    pub config: Option<String>,
    pub catalog: Option<String>,
}

/// Toggle state a session starts with. Search text is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDefaults {
    #[serde(default = "default_true")]
    pub linux: bool,
    #[serde(default = "default_true")]
    pub macos: bool,
    #[serde(default = "default_true")]
    pub windows: bool,
    #[serde(default)]
    pub show_content_warnings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            linux: true,
            macos: true,
            windows: true,
            show_content_warnings: false,
        }
    }
}

impl FilterDefaults {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            linux: self.linux,
            macos: self.macos,
            windows: self.windows,
            search: String::new(),
            show_content_warnings: self.show_content_warnings,
        }
    }
}

/// Which document a source setting refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Config,
    Catalog,
}

impl Settings {
    pub fn source(&self, kind: DocumentKind) -> Option<&str> {
        match kind {
            DocumentKind::Config => self.sources.config.as_deref(),
            DocumentKind::Catalog => self.sources.catalog.as_deref(),
        }
    }

    pub fn set_source(&mut self, kind: DocumentKind, value: Option<String>) {
        match kind {
            DocumentKind::Config => self.sources.config = value,
            DocumentKind::Catalog => self.sources.catalog = value,
        }
    }

    /// Resolve a document source using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. Saved source in `settings.toml`
    /// 3. Built-in default under `config/`
    pub fn resolve_source(&self, kind: DocumentKind, cli_override: Option<DocumentSource>) -> DocumentSource {
        if let Some(source) = cli_override {
            return source;
        }
        if let Some(saved) = self.source(kind)
            && let Ok(source) = saved.parse()
        {
            return source;
        }
        match kind {
            DocumentKind::Config => DocumentSource::default_config(),
            DocumentKind::Catalog => DocumentSource::default_catalog(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/prize-list/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("prize-list").join("settings.toml")
}

/// Load settings from the canonical path.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Save settings to the canonical path.
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

/// Save settings atomically (write to temp, then rename).
pub fn save_settings_to(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// The settings file as pretty-printed TOML, for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml"));
        assert_eq!(settings, Settings::default());
        assert!(settings.filters.linux);
        assert!(!settings.filters.show_content_warnings);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "this is [not toml").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("settings.toml");
        let mut settings = Settings::default();
        settings.set_source(DocumentKind::Catalog, Some("https://example.com/games.json".to_string()));
        settings.filters.windows = false;

        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn partial_filters_table_keeps_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[filters]\nshow_content_warnings = true\n").unwrap();
        let settings = load_settings_from(&path);
        assert!(settings.filters.show_content_warnings);
        assert!(settings.filters.linux && settings.filters.macos && settings.filters.windows);
    }

    #[test]
    fn source_priority_chain() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.resolve_source(DocumentKind::Config, None),
            DocumentSource::default_config()
        );

        settings.set_source(DocumentKind::Config, Some("https://example.com/config.json".to_string()));
        assert_eq!(
            settings.resolve_source(DocumentKind::Config, None),
            DocumentSource::Url("https://example.com/config.json".to_string())
        );

        let cli = DocumentSource::Path(PathBuf::from("local.json"));
        assert_eq!(settings.resolve_source(DocumentKind::Config, Some(cli.clone())), cli);
        assert_eq!(
            settings.resolve_source(DocumentKind::Catalog, None),
            DocumentSource::default_catalog()
        );
    }

    #[test]
    fn defaults_become_filter_state() {
        let defaults = FilterDefaults {
            linux: false,
            ..Default::default()
        };
        let state = defaults.to_filter_state();
        assert!(!state.linux && state.macos && state.windows);
        assert!(state.search.is_empty());
    }
}
