//! Domain error type.
//!
//! All errors are:
//! - Cloneable (for retry logic)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown network label '{label}'")]
    UnknownNetwork { label: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Choose a non-empty name without path separators".into(),
                "Examples: onchain-agent, my-agent, agent2".into(),
            ],
            Self::UnknownNetwork { label } => vec![
                format!("'{}' is not in the network table", label),
                "Pick a network from the offered list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownNetwork { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
