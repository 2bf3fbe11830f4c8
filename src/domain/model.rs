use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One address the autocomplete can offer: a free-text label plus a
/// one-character type tag (`g` street address, `f` property, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub tag: char,
}

impl Candidate {
    pub fn new(label: impl Into<String>, tag: char) -> Self {
        Self {
            label: label.into(),
            tag,
        }
    }

    /// Text the suggestion source matches against.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.label, self.tag)
    }
}

/// Read-only, ordered candidate set. Position is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateList(Vec<Candidate>);

impl CandidateList {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self(candidates)
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self(vec![
            Candidate::new("Torsgatan 7", 'g'),
            Candidate::new("Testfastighet 7", 'f'),
            Candidate::new("Testgatan 1", 'g'),
        ])
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Kind of DOM event that confirmed a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    KeyDown,
    Click,
    Other(String),
}

impl SelectionEvent {
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            "keydown" => SelectionEvent::KeyDown,
            "click" => SelectionEvent::Click,
            other => SelectionEvent::Other(other.to_string()),
        }
    }

    pub fn event_type(&self) -> &str {
        match self {
            SelectionEvent::KeyDown => "keydown",
            SelectionEvent::Click => "click",
            SelectionEvent::Other(name) => name,
        }
    }
}

impl fmt::Display for SelectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

/// A rendered suggestion element as handed back by the widget on selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemElement {
    attributes: HashMap<String, String>,
}

impl ItemElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
