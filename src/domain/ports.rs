use crate::domain::model::{Candidate, ItemElement, SelectionEvent};
use crate::utils::error::Result;

/// The host page: one text input to read and one map frame to navigate.
pub trait Page {
    /// Current value of the input element, `None` if it does not exist.
    fn input_value(&self, id: &str) -> Option<String>;

    /// Points the frame at `url`. Returns false if the frame does not exist.
    fn set_frame_src(&mut self, id: &str, url: &str) -> bool;
}

/// Policy callbacks handed to the autocomplete widget engine.
pub trait AutocompleteHooks {
    /// Feeds the matches for `term` to `suggest`. May call it at any point
    /// before returning.
    fn source(&self, term: &str, suggest: &mut dyn FnMut(Vec<Candidate>));

    /// Dropdown markup for one candidate.
    fn render_item(&self, item: &Candidate, search: &str) -> Result<String>;

    fn on_select(&self, event: &SelectionEvent, term: &str, item: &ItemElement) -> Result<()>;
}

/// Blocking user notification (a modal alert on a real page).
pub trait Notifier {
    fn notify(&self, message: &str);
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}
