//! `veriscaff components`: emit the seven protocol UVM components.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use veriscaff_adapters::{LocalFilesystem, MemoryFilesystem, SilentProgress, SystemClock};
use veriscaff_core::application::{
    ComponentEmitter,
    ports::{Filesystem, ProgressReporter},
};

use crate::{cli::ComponentsArgs, error::CliResult, output::OutputManager, progress::TerminalProgress};

/// JSON shape of a components run.
#[derive(Debug, Serialize)]
struct ComponentsReport<'a> {
    protocol: &'a str,
    output_dir: &'a PathBuf,
    dry_run: bool,
    files: &'a [PathBuf],
}

#[instrument(skip_all, fields(protocol = %args.protocol))]
pub fn execute(args: ComponentsArgs, output: OutputManager) -> CliResult<()> {
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

    let emitter = ComponentEmitter::new(filesystem, progress, Arc::new(SystemClock));
    let files = emitter.generate_all_components(&args.protocol, &args.output_dir)?;
    info!(files = files.len(), "Components generated");

    if output.is_json() {
        return output.json(&ComponentsReport {
            protocol: &args.protocol,
            output_dir: &args.output_dir,
            dry_run: args.dry_run,
            files: &files,
        });
    }

    if args.dry_run {
        output.info(&format!(
            "Dry run: would write {} component files under {}",
            files.len(),
            args.output_dir.display()
        ))?;
        for file in &files {
            output.detail(&format!("  {}", file.display()))?;
        }
        return Ok(());
    }

    output.success(&format!(
        "Generated {} {} components in {}",
        files.len(),
        args.protocol.to_uppercase(),
        args.output_dir.display()
    ))?;
    Ok(())
}
