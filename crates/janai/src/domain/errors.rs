//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or missing request fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Monitoring backend lookup failed (non-success status or transport failure)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Completion model failed or returned an unusable result
    #[error("Completion error: {0}")]
    Completion(String),
}

impl DomainError {
    /// Short, stable name of the error kind (for logs)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Upstream(_) => "upstream",
            Self::Completion(_) => "completion",
        }
    }
}
