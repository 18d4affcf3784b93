//! Terminal rendering of scaffold progress.

use std::path::Path;

use veriscaff_core::application::ports::ProgressReporter;
use veriscaff_core::domain::{IdentifierIssue, ScaffoldStep};

use crate::output::OutputManager;

/// Prints steps, directories and files as the core reports them.
///
/// Write failures on stdout are dropped: progress is advisory and must not
/// abort generation.
pub struct TerminalProgress {
    output: OutputManager,
}

impl TerminalProgress {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl ProgressReporter for TerminalProgress {
    fn step_started(&self, index: usize, total: usize, step: ScaffoldStep) {
        let _ = self.output.header(&format!("[{index}/{total}] {step}..."));
    }

    fn directory_created(&self, path: &Path) {
        let _ = self
            .output
            .detail(&format!("  Created directory: {}", path.display()));
    }

    fn file_written(&self, path: &Path) {
        let _ = self
            .output
            .detail(&format!("  Generated: {}", path.display()));
    }

    fn identifier_issue(&self, issue: &IdentifierIssue) {
        let _ = self.output.warning(&issue.to_string());
    }
}
