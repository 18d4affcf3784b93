//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::{IdentifierIssue, ScaffoldStep};
use crate::error::VeriscaffResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `veriscaff_adapters::filesystem::LocalFilesystem` (production)
/// - `veriscaff_adapters::filesystem::MemoryFilesystem` (tests, dry runs)
///
/// ## Contract
///
/// - `create_dir_all` has `mkdir -p` semantics and succeeds on existing directories
/// - `write_file` overwrites existing files; the parent must already exist
/// - Only the executable bit is modelled; adapters map it to their platform
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> VeriscaffResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> VeriscaffResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> VeriscaffResult<()>;
}

/// Port for user-visible progress.
///
/// Implemented by:
/// - `veriscaff_adapters::progress::SilentProgress` (library use)
/// - `veriscaff_adapters::progress::RecordingProgress` (tests)
/// - the CLI's terminal reporter
pub trait ProgressReporter: Send + Sync {
    /// A scaffold step is starting. `index` is 1-based.
    fn step_started(&self, index: usize, total: usize, step: ScaffoldStep);

    fn directory_created(&self, path: &Path);

    fn file_written(&self, path: &Path);

    /// A request value will produce malformed output.
    fn identifier_issue(&self, issue: &IdentifierIssue);
}

/// Port for the generation timestamp.
///
/// Implemented by:
/// - `veriscaff_adapters::clock::SystemClock` (local wall time)
/// - `veriscaff_adapters::clock::FixedClock` (tests, reproducible output)
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
