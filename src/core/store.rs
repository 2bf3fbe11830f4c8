use crate::core::hooks::AddressHooks;
use crate::core::suggest::filter_candidates;
use crate::domain::model::{Candidate, CandidateList, ItemElement, SelectionEvent};
use crate::domain::ports::{AutocompleteHooks, Notifier, Storage};
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::log_safe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Upper bound on precomputed suggestions per prefix.
pub const NUM_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    pub suggestions: Vec<Candidate>,
    pub created_at: DateTime<Utc>,
}

/// Precomputed suggestions keyed by input prefix, held in memory for low
/// latency and persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionStore {
    entries: BTreeMap<String, SuggestionEntry>,
}

impl SuggestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries for every lowercase label prefix up to `max_prefix_chars`
    /// chars, each with at most `NUM_SUGGESTIONS` matches in list order.
    pub fn build_from(candidates: &CandidateList, max_prefix_chars: usize) -> Self {
        let mut store = Self::new();
        if candidates.is_empty() {
            tracing::warn!("No candidates configured, prefix store stays empty");
            return store;
        }

        for candidate in candidates {
            let label = candidate.label.to_lowercase();
            for len in 1..=max_prefix_chars {
                let prefix: String = label.chars().take(len).collect();
                if prefix.chars().count() < len {
                    break;
                }
                if store.entries.contains_key(&prefix) {
                    continue;
                }

                let mut matches = filter_candidates(candidates, &prefix);
                matches.truncate(NUM_SUGGESTIONS);
                store.insert(prefix, matches);
            }
        }

        tracing::debug!(
            "Built {} prefix entries from {} candidates",
            store.len(),
            candidates.len()
        );
        store
    }

    /// Stores suggestions for a new prefix. Prefixes are unique.
    pub fn add_suggestion(&mut self, prefix: &str, suggestions: Vec<Candidate>) -> Result<()> {
        if self.entries.contains_key(prefix) {
            return Err(SearchError::DuplicatePrefix {
                prefix: prefix.to_string(),
            });
        }
        self.insert(prefix.to_string(), suggestions);
        Ok(())
    }

    fn insert(&mut self, prefix: String, suggestions: Vec<Candidate>) {
        self.entries.insert(
            prefix,
            SuggestionEntry {
                suggestions,
                created_at: Utc::now(),
            },
        );
    }

    pub fn get_suggestions(&self, prefix: &str) -> Option<&[Candidate]> {
        self.entries
            .get(prefix)
            .map(|entry| entry.suggestions.as_slice())
    }

    pub fn entry(&self, prefix: &str) -> Option<&SuggestionEntry> {
        self.entries.get(prefix)
    }

    pub fn all_suggestions(&self) -> HashMap<String, Vec<Candidate>> {
        self.entries
            .iter()
            .map(|(prefix, entry)| (prefix.clone(), entry.suggestions.clone()))
            .collect()
    }

    pub fn remove_suggestion(&mut self, prefix: &str) -> bool {
        self.entries.remove(prefix).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a store from `path`. A missing file is an empty store.
    pub fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        if !storage.exists(path) {
            tracing::info!("No suggestion store at {}, starting empty", path);
            return Ok(Self::new());
        }

        let data = storage.read_file(path)?;
        let store: Self = serde_json::from_slice(&data)?;
        tracing::debug!("Loaded {} prefix entries from {}", store.len(), path);
        Ok(store)
    }

    pub fn save<S: Storage>(&self, storage: &S, path: &str) -> Result<()> {
        let data = serde_json::to_vec_pretty(self)?;
        storage.write_file(path, &data)?;
        tracing::info!("Saved {} prefix entries to {}", self.len(), path);
        Ok(())
    }
}

/// Answers from the prefix store when the lowercased term is a stored
/// prefix, otherwise scans the candidate list.
pub struct StoredSource<N: Notifier> {
    store: SuggestionStore,
    fallback: AddressHooks<N>,
}

impl<N: Notifier> StoredSource<N> {
    pub fn new(store: SuggestionStore, fallback: AddressHooks<N>) -> Self {
        Self { store, fallback }
    }
}

impl<N: Notifier> AutocompleteHooks for StoredSource<N> {
    fn source(&self, term: &str, suggest: &mut dyn FnMut(Vec<Candidate>)) {
        match self.store.get_suggestions(&term.to_lowercase()) {
            Some(stored) => {
                tracing::debug!("Prefix store hit for '{}'", log_safe(term));
                suggest(stored.to_vec());
            }
            None => self.fallback.source(term, suggest),
        }
    }

    fn render_item(&self, item: &Candidate, search: &str) -> Result<String> {
        self.fallback.render_item(item, search)
    }

    fn on_select(&self, event: &SelectionEvent, term: &str, item: &ItemElement) -> Result<()> {
        self.fallback.on_select(event, term, item)
    }
}
