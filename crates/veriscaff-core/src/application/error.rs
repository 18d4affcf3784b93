//! Application layer errors.
//!
//! These errors represent failures in orchestration, not request rules.
//! Request errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while materializing a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A write targeted a directory that does not exist.
    #[error("Parent directory missing for {path}")]
    ParentMissing { path: PathBuf },

    /// Adapter state is unusable (lock poisoned, etc.).
    #[error("Filesystem adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place; re-run to overwrite them"
                    .into(),
            ],
            Self::ParentMissing { path } => vec![
                format!("Create the parent of {} first", path.display()),
                "This is likely a bug in veriscaff".into(),
            ],
            Self::LockPoisoned => vec!["Try again; a previous write panicked".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::ParentMissing { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
