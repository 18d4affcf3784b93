//! Template artifacts: a catalog entry paired with its destination.

use crate::domain::{DomainError, FileMode, RelativePath, RenderContext};

/// An artifact before rendering.
///
/// `dir` and `file` may carry placeholders themselves (`{{PROTOCOL}}_driver.sv`).
/// An empty `dir` places the file at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub dir: &'static str,
    pub file: &'static str,
    pub body: &'static str,
    pub mode: FileMode,
}

impl ArtifactSpec {
    pub const fn new(dir: &'static str, file: &'static str, body: &'static str) -> Self {
        Self {
            dir,
            file,
            body,
            mode: FileMode::Regular,
        }
    }

    pub const fn executable(mut self) -> Self {
        self.mode = FileMode::Executable;
        self
    }

    /// Relative destination after substitution.
    pub fn path(&self, ctx: &RenderContext) -> Result<RelativePath, DomainError> {
        let file = ctx.render(self.file);
        if self.dir.is_empty() {
            RelativePath::try_new(file)
        } else {
            RelativePath::try_new(ctx.render(self.dir))?.join(file)
        }
    }

    /// Substitute the context into both path and body.
    pub fn render(&self, ctx: &RenderContext) -> Result<Artifact, DomainError> {
        Ok(Artifact {
            path: self.path(ctx)?,
            content: ctx.render(self.body),
            mode: self.mode,
        })
    }
}

/// A rendered artifact ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: RelativePath,
    pub content: String,
    pub mode: FileMode,
}
