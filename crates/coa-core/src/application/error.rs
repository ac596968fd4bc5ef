//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Prompt backend failed (terminal gone, read error).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// User interrupted the flow before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// Template archive download failed.
    #[error("Template download failed from {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// Downloaded archive could not be unpacked.
    #[error("Archive extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    /// Expected template subpath absent after extraction.
    #[error("Template not found in archive at '{subpath}'")]
    TemplateMissing { subpath: String },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Destination directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DownloadFailed { url, .. } => vec![
                format!("Could not download: {}", url),
                "Check your network connection".into(),
                "Re-run the command to retry".into(),
            ],
            Self::ExtractionFailed { .. } => vec![
                "The downloaded archive appears corrupt".into(),
                "Re-run the command to download a fresh copy".into(),
            ],
            Self::TemplateMissing { subpath } => vec![
                format!("Expected template directory missing: {}", subpath),
                "The remote template layout may have changed; update this tool".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                format!("Or remove it first: rm -rf {}", path.display()),
            ],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::Cancelled,
            Self::DownloadFailed { .. } | Self::ExtractionFailed { .. } => ErrorCategory::Network,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_failure_is_network() {
        let err = ApplicationError::DownloadFailed {
            url: "https://example.invalid/a.zip".into(),
            reason: "timeout".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.suggestions().iter().any(|s| s.contains("network")));
    }

    #[test]
    fn project_exists_suggests_different_name() {
        let err = ApplicationError::ProjectExists {
            path: PathBuf::from("./demo"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("different")));
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = ApplicationError::TemplateMissing {
            subpath: "python/create-onchain-agent/templates".into(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
