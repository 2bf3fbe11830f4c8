pub mod toml_config;

pub use toml_config::{ElementIds, MapConfig, SearchConfig, StoreConfig, WidgetConfig};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sthlm-map-search")]
#[command(about = "Map search URLs and address autocomplete for the Stockholm city map")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the embedded map URL for an address
    MapUrl { address: String },

    /// List the candidates matching a search term
    Suggest {
        term: String,
        #[arg(long, help = "Print dropdown markup instead of labels")]
        render: bool,
        #[arg(long, help = "Answer from a prefix store (JSON)")]
        store: Option<String>,
    },

    /// Select one suggestion for a term and show the notification
    Select {
        term: String,
        index: usize,
        #[arg(long, default_value = "click")]
        event: String,
    },

    /// Precompute the prefix store from the configured candidates
    BuildIndex {
        output: String,
        #[arg(long)]
        max_prefix: Option<usize>,
    },

    /// Check whether an address only holds allowed characters
    Check { address: String },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Configuration file contents, or the built-in defaults.
    pub fn load_search_config(&self) -> crate::Result<SearchConfig> {
        match &self.config {
            Some(path) => SearchConfig::from_file(path),
            None => Ok(SearchConfig::default()),
        }
    }
}
