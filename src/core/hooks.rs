use crate::core::{render, select, suggest};
use crate::domain::model::{Candidate, CandidateList, ItemElement, SelectionEvent};
use crate::domain::ports::{AutocompleteHooks, Notifier};
use crate::utils::error::Result;
use crate::utils::validation::log_safe;

/// Address autocomplete policy over a fixed candidate list.
pub struct AddressHooks<N: Notifier> {
    candidates: CandidateList,
    notifier: N,
}

impl<N: Notifier> AddressHooks<N> {
    pub fn new(candidates: CandidateList, notifier: N) -> Self {
        Self {
            candidates,
            notifier,
        }
    }
}

impl<N: Notifier> AutocompleteHooks for AddressHooks<N> {
    fn source(&self, term: &str, suggest: &mut dyn FnMut(Vec<Candidate>)) {
        let matches = suggest::filter_candidates(&self.candidates, term);
        tracing::debug!(
            "{} of {} candidates match '{}'",
            matches.len(),
            self.candidates.len(),
            log_safe(term)
        );
        suggest(matches);
    }

    fn render_item(&self, item: &Candidate, search: &str) -> Result<String> {
        render::render_item(item, search)
    }

    fn on_select(&self, event: &SelectionEvent, term: &str, item: &ItemElement) -> Result<()> {
        let message = select::selection_message(event, item)?;
        tracing::debug!("Selection via {} for term '{}'", event, log_safe(term));
        self.notifier.notify(&message);
        Ok(())
    }
}
