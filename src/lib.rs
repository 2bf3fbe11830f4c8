pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryPage, RecordingNotifier, StdoutNotifier};
pub use config::SearchConfig;
pub use core::{
    controller::AutocompleteController,
    hooks::AddressHooks,
    map::{build_map_url, refresh_map},
    store::{StoredSource, SuggestionStore},
};
pub use domain::model::{Candidate, CandidateList, ItemElement, SelectionEvent};
pub use utils::error::{Result, SearchError};
