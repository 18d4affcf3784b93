// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `VeriscaffError`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Example: veriscaff generate DemoBus --protocol AXI4".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' is rooted or climbs above the project root", path),
                "Avoid a leading '/' or a leading '..' in protocol and project names".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } | Self::PathEscapesRoot { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}
