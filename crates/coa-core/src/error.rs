//! Unified error handling for the core crate.
//!
//! Wraps domain and application errors behind one type with categories and
//! user-actionable suggestions; the CLI maps categories to exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// Errors from the domain layer (validation, lookup failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (prompting, fetching, rendering).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in create-onchain-agent".into(),
                "Please report it at: http://github.com/coinbase/agentkit".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// True when the flow was cut short by the user rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Network,
    Cancelled,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_is_detected() {
        let err = ScaffoldError::from(ApplicationError::Cancelled);
        assert!(err.is_cancelled());
        assert_eq!(err.category(), ErrorCategory::Cancelled);
    }

    #[test]
    fn domain_categories_map_through() {
        let err = ScaffoldError::from(DomainError::UnknownNetwork { label: "x".into() });
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn internal_suggestions_mention_reporting() {
        let err = ScaffoldError::Internal {
            message: "oops".into(),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("report")));
    }
}
