//! Error handling for the veriscaff CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::fmt::Write as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use veriscaff_core::error::VeriscaffError;

pub use veriscaff_core::error::ErrorCategory as CoreCategory;

use crate::config::KEYS;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The project name cannot be used as a directory name.
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Invalid value '{value}' for '{key}': {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    #[error("Scaffolding failed: {0}")]
    Core(#[from] VeriscaffError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialising a report for `--output-format json` failed.
    #[error("Failed to render JSON output")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "The name becomes a directory; use a plain name without path separators".into(),
                "Use --output-dir to choose where the project is created".into(),
                "Examples: DemoBus, axi_bridge, SpiCtrl".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Run 'veriscaff config path' to locate the active config file".into(),
                "Run 'veriscaff init --force' to recreate a default config".into(),
            ],

            Self::UnknownConfigKey { key } => {
                let mut suggestions = vec![
                    format!("'{}' is not a configuration key", key),
                    "Known keys:".into(),
                ];
                suggestions.extend(KEYS.iter().map(|k| format!("  • {k}")));
                suggestions
            }

            Self::InvalidConfigValue { key, .. } => vec![
                format!("Run 'veriscaff config get {}' to see the current value", key),
                "Booleans are 'true' or 'false'".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Json(_) => vec!["Retry with --output-format human".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } => ErrorCategory::NotFound,
            Self::InvalidConfigValue { .. } => ErrorCategory::UserError,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Json(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for a terminal: ANSI styling, cause chain when `verbose`.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Same layout as [`Self::format_colored`] without escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, colored: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_owned() }
        };
        let mut out = String::new();

        let _ = writeln!(
            out,
            "\n{} {}\n",
            paint("\u{2717}", |t| t.red().bold().to_string()),
            paint("Error:", |t| t.red().bold().to_string())
        );
        let _ = writeln!(out, "  {}", paint(&self.to_string(), |t| t.red().to_string()));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    paint("Caused by:", |t| t.dimmed().to_string()),
                    paint(&err.to_string(), |t| t.dimmed().to_string())
                );
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            );
            for suggestion in &suggestions {
                let _ = writeln!(out, "  {suggestion}");
            }
        }

        if !verbose {
            let _ = writeln!(
                out,
                "\n{}",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            );
        }
        out
    }

    /// Emit one event at a level matching the category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(exit_code = self.exit_code(), "{self}")
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!("caused by: {cause}");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Attaches a message to I/O failures. Core errors convert through `?`.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: f().into(),
            source,
        })
    }
}
