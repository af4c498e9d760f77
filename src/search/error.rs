//! Error types for search spec parsing.

use std::fmt;

/// Errors that can occur while interpreting a search spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A `/.../` spec whose body is not a valid regular expression.
    MalformedSpec { spec: String, message: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MalformedSpec { spec, message } => {
                write!(f, "Invalid search pattern '{}': {}", spec, message)
            }
        }
    }
}

impl std::error::Error for SearchError {}
