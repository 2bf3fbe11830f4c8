pub mod controller;
pub mod hooks;
pub mod map;
pub mod render;
pub mod select;
pub mod store;
pub mod suggest;

pub use crate::domain::model::{Candidate, CandidateList, ItemElement, SelectionEvent};
pub use crate::domain::ports::{AutocompleteHooks, Notifier, Page, Storage};
pub use crate::utils::error::Result;
