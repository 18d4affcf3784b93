//! Project scaffolder - main application orchestrator.
//!
//! Runs the blueprint for one request:
//! 1. Directory skeleton
//! 2. RTL placeholders
//! 3. Component bundle (via `ComponentEmitter`) plus environment and tests
//! 4. Simulation configuration
//! 5. Implementation subtree (when enabled)
//! 6. Documentation, CI workflow and ignore rules
//!
//! There is no rollback. A failing step aborts the run and leaves earlier
//! output in place; re-running overwrites from the top.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Clock, Filesystem, ProgressReporter},
        services::{ComponentEmitter, writer::ArtifactWriter},
    },
    domain::{
        ArtifactSpec, DomainValidator, GenerationRequest, IdentifierIssue, RelativePath,
        RenderContext, ScaffoldStep, blueprint, directory_skeleton,
    },
    error::VeriscaffResult,
};

/// Everything a project run created, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub project_name: String,
    pub protocol: String,
    pub simulator: String,
    pub include_implementation: bool,
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub issues: Vec<IdentifierIssue>,
}

/// Scaffolds one verification project.
///
/// One instance per run: the render context (and its timestamp) is fixed at
/// construction.
pub struct ProjectScaffolder {
    request: GenerationRequest,
    root: PathBuf,
    context: RenderContext,
    emitter: ComponentEmitter,
    filesystem: Arc<dyn Filesystem>,
    progress: Arc<dyn ProgressReporter>,
}

impl ProjectScaffolder {
    /// The project is created at `output_dir/<project_name>`.
    pub fn new(
        request: GenerationRequest,
        output_dir: impl AsRef<Path>,
        filesystem: Arc<dyn Filesystem>,
        progress: Arc<dyn ProgressReporter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let root = output_dir.as_ref().join(request.project_name());
        let context = RenderContext::new(&request, clock.now());
        let emitter = ComponentEmitter::new(Arc::clone(&filesystem), Arc::clone(&progress), clock);

        Self {
            request,
            root,
            context,
            emitter,
            filesystem,
            progress,
        }
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run every step in order.
    #[instrument(
        skip_all,
        fields(
            project = %self.request.project_name(),
            protocol = %self.request.protocol_upper(),
            root = %self.root.display()
        )
    )]
    pub fn generate_project(&self) -> VeriscaffResult<GenerationReport> {
        info!("Generating {}", self.request);

        let issues = DomainValidator::identifier_issues(&self.request);
        for issue in &issues {
            debug!(field = issue.field, value = %issue.value, "{}", issue.problem);
            self.progress.identifier_issue(issue);
        }

        let mut report = GenerationReport {
            project_name: self.request.project_name().to_string(),
            protocol: self.request.protocol_upper(),
            simulator: self.request.simulator_lower(),
            include_implementation: self.request.include_implementation(),
            root: self.root.clone(),
            directories: Vec::new(),
            files: Vec::new(),
            issues,
        };

        let plan = ScaffoldStep::plan(self.request.include_implementation());
        let total = plan.len();

        for (index, step) in plan.into_iter().enumerate() {
            self.progress.step_started(index + 1, total, step);
            info!(step = index + 1, total, "{}", step);

            match step {
                ScaffoldStep::Directories => {
                    report.directories = self.create_directory_structure()?;
                }
                ScaffoldStep::Rtl => report.files.extend(self.generate_rtl_templates()?),
                ScaffoldStep::Uvm => report.files.extend(self.generate_uvm_templates()?),
                ScaffoldStep::Simulation => {
                    report.files.extend(self.generate_simulation_config()?)
                }
                ScaffoldStep::Implementation => {
                    report.files.extend(self.generate_implementation_templates()?)
                }
                ScaffoldStep::Documentation => {
                    report.files.extend(self.generate_documentation()?)
                }
                ScaffoldStep::GithubActions => {
                    report.files.extend(self.generate_github_actions()?)
                }
                ScaffoldStep::Gitignore => report.files.extend(self.generate_gitignore()?),
            }
        }

        info!(
            directories = report.directories.len(),
            files = report.files.len(),
            "Project generated"
        );
        Ok(report)
    }

    /// Create the root and the fixed skeleton, parents first.
    pub fn create_directory_structure(&self) -> VeriscaffResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(&self.root)?;

        let mut created = Vec::new();
        for dir in directory_skeleton(self.request.include_implementation()) {
            let relative = RelativePath::try_new(self.context.render(dir))?;
            let path = self.root.join(relative.as_path());

            self.filesystem.create_dir_all(&path)?;
            debug!(path = %path.display(), "Directory created");
            self.progress.directory_created(&path);
            created.push(path);
        }

        Ok(created)
    }

    /// `rtl/<p>_if.sv` and `rtl/<project>_core.sv`.
    pub fn generate_rtl_templates(&self) -> VeriscaffResult<Vec<PathBuf>> {
        self.write(&blueprint::RTL)
    }

    /// Component bundle, then agent, env, scoreboard, testbench and tests.
    pub fn generate_uvm_templates(&self) -> VeriscaffResult<Vec<PathBuf>> {
        let mut files = self.emitter.emit(&self.context, &self.root)?;
        files.extend(self.write(&blueprint::ENVIRONMENT)?);
        Ok(files)
    }

    /// Test catalog, filelists and run scripts.
    pub fn generate_simulation_config(&self) -> VeriscaffResult<Vec<PathBuf>> {
        self.write(&blueprint::SIMULATION)
    }

    /// Constraints, build script, Makefile and IP/BD readmes. Writes nothing
    /// when the request excludes implementation.
    pub fn generate_implementation_templates(&self) -> VeriscaffResult<Vec<PathBuf>> {
        if !self.request.include_implementation() {
            debug!("Implementation templates disabled");
            return Ok(Vec::new());
        }
        self.write(&blueprint::IMPLEMENTATION)
    }

    /// `README.md` and the verification guide.
    pub fn generate_documentation(&self) -> VeriscaffResult<Vec<PathBuf>> {
        self.write(&blueprint::DOCUMENTATION)
    }

    /// `.github/workflows/ci.yml`.
    pub fn generate_github_actions(&self) -> VeriscaffResult<Vec<PathBuf>> {
        self.write(&blueprint::CI)
    }

    /// `.gitignore`.
    pub fn generate_gitignore(&self) -> VeriscaffResult<Vec<PathBuf>> {
        self.write(&blueprint::IGNORE_RULES)
    }

    fn write(&self, specs: &[ArtifactSpec]) -> VeriscaffResult<Vec<PathBuf>> {
        ArtifactWriter::new(&*self.filesystem, &*self.progress, &self.root)
            .write_all(specs, &self.context)
    }
}
