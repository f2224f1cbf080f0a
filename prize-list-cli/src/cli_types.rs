//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use prize_list_lib::settings::DocumentKind;
use prize_list_lib::{DocumentSource, StorePlatform};

#[derive(Parser)]
#[command(name = "prize-list")]
#[command(about = "Browse and filter a catalog of giveaway game keys", long_about = None)]
pub(crate) struct Cli {
    /// Config document (path or http(s) URL); overrides settings.toml
    #[arg(long, global = true)]
    pub config_doc: Option<DocumentSource>,

    /// Catalog document (path or http(s) URL); overrides settings.toml
    #[arg(long, global = true)]
    pub catalog_doc: Option<DocumentSource>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter arguments shared by commands that render the list.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Free-text search; every space-separated word must match
    #[arg(short, long)]
    pub search: Option<String>,

    /// Platforms to show (e.g., linux,macos,windows); others are toggled off
    #[arg(short, long, value_delimiter = ',')]
    pub platforms: Option<Vec<StorePlatform>>,

    /// Include items with content warnings
    #[arg(short = 'w', long)]
    pub show_content_warnings: bool,

    /// Deep link to a row (e.g., '#returnofobrastudios'); always shown
    #[arg(short, long)]
    pub fragment: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the filtered list grouped by prize tier
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Show (truncated) descriptions under each row
        #[arg(short, long)]
        descriptions: bool,

        /// Print visible rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show every field of a single row
    Show {
        /// Row slug, with or without the leading '#'
        slug: String,
    },

    /// Interactively filter the list, reading commands from stdin
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Load both documents and report configuration problems
    Validate,

    /// Manage settings (default sources and filters)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and resolved document sources
    Show,

    /// Print the settings file path
    Path,

    /// Save the default source for a document
    SetSource {
        /// Which document
        #[arg(value_enum)]
        document: DocumentArg,

        /// Path or http(s) URL
        source: DocumentSource,
    },

    /// Forget the saved source for a document
    ClearSource {
        /// Which document
        #[arg(value_enum)]
        document: DocumentArg,
    },

    /// Save the toggle state new sessions start with
    SetFilters {
        /// Platforms enabled by default (e.g., linux,windows)
        #[arg(short, long, value_delimiter = ',')]
        platforms: Option<Vec<StorePlatform>>,

        /// Whether items with content warnings are shown by default
        #[arg(short = 'w', long)]
        show_content_warnings: Option<bool>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum DocumentArg {
    Config,
    Catalog,
}

impl From<DocumentArg> for DocumentKind {
    fn from(arg: DocumentArg) -> Self {
        match arg {
            DocumentArg::Config => DocumentKind::Config,
            DocumentArg::Catalog => DocumentKind::Catalog,
        }
    }
}
