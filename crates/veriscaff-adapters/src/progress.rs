//! Progress reporter adapters.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use veriscaff_core::{
    application::ports::ProgressReporter,
    domain::{IdentifierIssue, ScaffoldStep},
};

/// Discards every notification. Tracing still records the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn step_started(&self, _index: usize, _total: usize, _step: ScaffoldStep) {}
    fn directory_created(&self, _path: &Path) {}
    fn file_written(&self, _path: &Path) {}
    fn identifier_issue(&self, _issue: &IdentifierIssue) {}
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Step {
        index: usize,
        total: usize,
        step: ScaffoldStep,
    },
    Directory(PathBuf),
    File(PathBuf),
    Issue(IdentifierIssue),
}

/// Keeps every notification in order, for assertions.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events so far.
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn steps(&self) -> Vec<ScaffoldStep> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Step { step, .. } => Some(step),
                _ => None,
            })
            .collect()
    }

    pub fn files(&self) -> Vec<PathBuf> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::File(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ProgressEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl ProgressReporter for RecordingProgress {
    fn step_started(&self, index: usize, total: usize, step: ScaffoldStep) {
        self.push(ProgressEvent::Step { index, total, step });
    }

    fn directory_created(&self, path: &Path) {
        self.push(ProgressEvent::Directory(path.to_path_buf()));
    }

    fn file_written(&self, path: &Path) {
        self.push(ProgressEvent::File(path.to_path_buf()));
    }

    fn identifier_issue(&self, issue: &IdentifierIssue) {
        self.push(ProgressEvent::Issue(issue.clone()));
    }
}
