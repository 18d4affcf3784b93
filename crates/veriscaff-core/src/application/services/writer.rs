//! Shared write path for rendered artifacts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::{Filesystem, ProgressReporter},
    domain::{ArtifactSpec, RenderContext},
    error::VeriscaffResult,
};

/// Renders artifacts and writes them below a root.
///
/// Stops at the first failing write. Files already written stay on disk.
pub(crate) struct ArtifactWriter<'a> {
    filesystem: &'a dyn Filesystem,
    progress: &'a dyn ProgressReporter,
    root: &'a Path,
}

impl<'a> ArtifactWriter<'a> {
    pub(crate) fn new(
        filesystem: &'a dyn Filesystem,
        progress: &'a dyn ProgressReporter,
        root: &'a Path,
    ) -> Self {
        Self {
            filesystem,
            progress,
            root,
        }
    }

    /// Write `specs` in order, returning the paths written.
    pub(crate) fn write_all(
        &self,
        specs: &[ArtifactSpec],
        ctx: &RenderContext,
    ) -> VeriscaffResult<Vec<PathBuf>> {
        specs.iter().map(|spec| self.write(spec, ctx)).collect()
    }

    fn write(&self, spec: &ArtifactSpec, ctx: &RenderContext) -> VeriscaffResult<PathBuf> {
        let artifact = spec.render(ctx)?;
        let path = self.root.join(artifact.path.as_path());

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, &artifact.content)?;

        if artifact.mode.is_executable() {
            self.filesystem.set_permissions(&path, true)?;
        }

        debug!(
            path = %path.display(),
            bytes = artifact.content.len(),
            "Artifact written"
        );
        self.progress.file_written(&path);

        Ok(path)
    }
}
