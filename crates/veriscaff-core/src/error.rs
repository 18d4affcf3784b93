//! Unified error handling for veriscaff core.
//!
//! Wraps domain and application errors behind one type, each carrying
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for veriscaff core operations.
#[derive(Debug, Error, Clone)]
pub enum VeriscaffError {
    /// Errors from the domain layer (request construction, path rules).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, orchestration).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl VeriscaffError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
///
/// `Validation` is a bad request; `Internal` is a failure while writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type VeriscaffResult<T> = Result<T, VeriscaffError>;
