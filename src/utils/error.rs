use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Element not found: #{id}")]
    ElementNotFound { id: String },

    #[error("Rendered item has no '{name}' attribute")]
    MissingAttribute { name: String },

    #[error("Suggestions already stored for prefix '{prefix}'")]
    DuplicatePrefix { prefix: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Highlight pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Page,
    Storage,
    Configuration,
    Internal,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::ElementNotFound { .. } | SearchError::MissingAttribute { .. } => {
                ErrorCategory::Page
            }
            SearchError::DuplicatePrefix { .. }
            | SearchError::IoError(_)
            | SearchError::SerializationError(_) => ErrorCategory::Storage,
            SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SearchError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    /// Short message for the terminal, without internal details.
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Page => format!("Page error: {}", self),
            ErrorCategory::Storage => format!("Could not read or write suggestions: {}", self),
            ErrorCategory::Configuration => format!("Bad configuration: {}", self),
            ErrorCategory::Internal => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
