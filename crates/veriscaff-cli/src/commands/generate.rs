//! Implementation of the `veriscaff generate` command.
//!
//! Responsibility: resolve flags against configuration into a
//! `GenerationRequest`, wire adapters into the core scaffolder and display
//! results.

use std::sync::Arc;

use tracing::{debug, instrument};

use veriscaff_adapters::{LocalFilesystem, MemoryFilesystem, SilentProgress, SystemClock};
use veriscaff_core::{
    application::{
        GenerationReport, ProjectScaffolder,
        ports::{Clock, Filesystem, ProgressReporter},
    },
    domain::GenerationRequest,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    progress::TerminalProgress,
};

/// Execute the `veriscaff generate` command.
///
/// 1. Validate the project name as a directory name
/// 2. Merge flags over configured defaults
/// 3. Scaffold to disk, or into memory for `--dry-run`
/// 4. Print the report as JSON, or a summary with next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    validate_project_name(&args.name)?;
    let request = build_request(&args, &config)?;

    debug!(
        protocol = %request.protocol(),
        simulator = %request.simulator(),
        implementation = request.include_implementation(),
        output_dir = %args.output_dir.display(),
        "Request resolved"
    );

    let filesystem: Arc<dyn Filesystem> = if args.dry_run {
        Arc::new(MemoryFilesystem::new())
    } else {
        Arc::new(LocalFilesystem::new())
    };
    let progress: Arc<dyn ProgressReporter> = if args.dry_run || output.is_json() {
        Arc::new(SilentProgress)
    } else {
        Arc::new(TerminalProgress::new(output.clone()))
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let scaffolder = ProjectScaffolder::new(request, &args.output_dir, filesystem, progress, clock);
    if !args.dry_run && !output.is_json() {
        output.header(&format!("Creating verification project '{}'", args.name))?;
        output.print(&format!(
            "  Location: {}",
            scaffolder.root().display()
        ))?;
    }

    let report = scaffolder.generate_project()?;

    if output.is_json() {
        return output.json(&report);
    }
    if args.dry_run {
        return show_dry_run(&report, &output);
    }

    output.print("")?;
    output.success(&format!(
        "Project '{}' generated at {}",
        report.project_name,
        report.root.display()
    ))?;
    show_summary(&report, &output)?;
    show_next_steps(scaffolder.request(), &output)?;

    Ok(())
}

// ── Request ───────────────────────────────────────────────────────────────────

/// Flags win over configured defaults.
fn build_request(args: &GenerateArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let protocol = args
        .protocol
        .clone()
        .unwrap_or_else(|| config.defaults.protocol.clone());
    let simulator = args
        .simulator
        .clone()
        .unwrap_or_else(|| config.defaults.simulator.clone());

    GenerationRequest::builder(args.name.as_str())
        .protocol(protocol)
        .simulator(simulator)
        .include_implementation(config.defaults.implementation && !args.no_impl)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

/// Project names become directory names under `--output-dir`.
fn validate_project_name(name: &str) -> CliResult<()> {
    let reason = if name.trim().is_empty() {
        "name cannot be empty"
    } else if name.starts_with('.') {
        "name cannot start with '.'"
    } else if name.contains('/') || name.contains('\\') {
        "name cannot contain path separators"
    } else {
        return Ok(());
    };

    Err(CliError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    })
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_dry_run(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create {} directories and {} files under {}",
        report.directories.len(),
        report.files.len(),
        report.root.display()
    ))?;
    for file in &report.files {
        output.detail(&format!("  {}", file.display()))?;
    }
    for issue in &report.issues {
        output.warning(&issue.to_string())?;
    }
    Ok(())
}

fn show_summary(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Summary:")?;
    output.print(&format!("  Protocol:       {}", report.protocol))?;
    output.print(&format!("  Simulator:      {}", report.simulator))?;
    output.print(&format!(
        "  Implementation: {}",
        if report.include_implementation { "yes" } else { "no" }
    ))?;
    output.print(&format!("  Directories:    {}", report.directories.len()))?;
    output.print(&format!("  Files:          {}", report.files.len()))?;
    if !report.issues.is_empty() {
        output.warning(&format!(
            "{} identifier issue(s); generated SystemVerilog may not compile as-is",
            report.issues.len()
        ))?;
    }
    Ok(())
}

fn show_next_steps(request: &GenerationRequest, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header("Next steps:")?;
    for (index, step) in next_steps(request).iter().enumerate() {
        output.print(&format!("  {}. {step}", index + 1))?;
    }
    Ok(())
}

/// Checklist printed after a successful run.
fn next_steps(request: &GenerationRequest) -> Vec<String> {
    let protocol = request.protocol_lower();
    let mut steps = vec![
        format!(
            "Fill in the design in rtl/{}_core.sv",
            request.project_lower()
        ),
        format!("Update the interface signals in rtl/{protocol}_if.sv"),
        format!(
            "Implement the protocol driving logic in \
             verification/uvm/agents/{protocol}_agent/{protocol}_driver.sv"
        ),
        format!("Add transaction constraints in verification/common/{protocol}_transaction.sv"),
        "Tune test entries in sim/config/test_config.cfg".into(),
        format!(
            "Run a test: cd {}/sim/run && ./run.sh {protocol}_base",
            request.project_name()
        ),
        "Push to GitHub to run .github/workflows/ci.yml".into(),
    ];
    if request.include_implementation() {
        steps.push(format!(
            "Build for FPGA: cd {}/impl && make help",
            request.project_name()
        ));
    }
    steps
}
