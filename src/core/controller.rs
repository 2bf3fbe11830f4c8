use crate::config::WidgetConfig;
use crate::core::render::parse_item_element;
use crate::domain::model::{Candidate, SelectionEvent};
use crate::domain::ports::AutocompleteHooks;
use crate::utils::error::Result;

/// Drives the hooks the way the widget engine would: gate on `min_chars`,
/// fetch suggestions, render them, and route selections back.
///
/// Debouncing, dropdown state and keyboard navigation are left to the real
/// engine and are not modelled here.
pub struct AutocompleteController<H: AutocompleteHooks> {
    config: WidgetConfig,
    hooks: H,
}

impl<H: AutocompleteHooks> AutocompleteController<H> {
    pub fn new(config: WidgetConfig, hooks: H) -> Self {
        tracing::debug!(
            "Autocomplete registered on {} (minChars={})",
            config.selector,
            config.min_chars
        );
        Self { config, hooks }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Matching candidates for `term`, or `None` while the term is shorter
    /// than `min_chars`.
    pub fn suggestions(&self, term: &str) -> Option<Vec<Candidate>> {
        if term.chars().count() < self.config.min_chars {
            return None;
        }

        let mut collected = Vec::new();
        self.hooks
            .source(term, &mut |found| collected.extend(found));
        Some(collected)
    }

    /// Rendered dropdown entries for `term`, in suggestion order.
    pub fn query(&self, term: &str) -> Result<Option<Vec<String>>> {
        let Some(found) = self.suggestions(term) else {
            return Ok(None);
        };

        let rendered = found
            .iter()
            .map(|item| self.hooks.render_item(item, term))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(rendered))
    }

    /// Hands a chosen dropdown entry to the selection hook.
    pub fn select(&self, event: &SelectionEvent, term: &str, markup: &str) -> Result<()> {
        let item = parse_item_element(markup)?;
        self.hooks.on_select(event, term, &item)
    }
}
