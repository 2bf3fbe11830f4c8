// Adapters layer: concrete implementations of the domain ports (page, notifier, storage).

pub mod notifier;
pub mod page;
pub mod storage;

pub use notifier::{RecordingNotifier, StdoutNotifier};
pub use page::MemoryPage;
pub use storage::LocalStorage;
