use crate::domain::ports::Page;
use std::collections::HashMap;

/// In-memory page holding input values and frame sources by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    inputs: HashMap<String, String>,
    frames: HashMap<String, String>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.inputs.insert(id.into(), value.into());
        self
    }

    /// Adds a frame with an empty `src`.
    pub fn with_frame(mut self, id: impl Into<String>) -> Self {
        self.frames.insert(id.into(), String::new());
        self
    }

    pub fn set_input(&mut self, id: &str, value: impl Into<String>) {
        self.inputs.insert(id.to_string(), value.into());
    }

    pub fn frame_src(&self, id: &str) -> Option<&str> {
        self.frames.get(id).map(String::as_str)
    }
}

impl Page for MemoryPage {
    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn set_frame_src(&mut self, id: &str, url: &str) -> bool {
        match self.frames.get_mut(id) {
            Some(src) => {
                *src = url.to_string();
                true
            }
            None => false,
        }
    }
}
