//! Component emitter - the fixed bundle of seven UVM component files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Clock, Filesystem, ProgressReporter},
        services::writer::ArtifactWriter,
    },
    domain::{DomainValidator, RenderContext, blueprint},
    error::VeriscaffResult,
};

/// Emits transaction, driver, monitor, sequencer and the three sequences for
/// one protocol.
///
/// Output depends only on the protocol, the output root and the clock.
/// Paths are deterministic; only embedded timestamps change between runs.
pub struct ComponentEmitter {
    filesystem: Arc<dyn Filesystem>,
    progress: Arc<dyn ProgressReporter>,
    clock: Arc<dyn Clock>,
}

impl ComponentEmitter {
    pub fn new(
        filesystem: Arc<dyn Filesystem>,
        progress: Arc<dyn ProgressReporter>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            filesystem,
            progress,
            clock,
        }
    }

    /// Emit all seven component files below `output_root`.
    ///
    /// Missing directories are created. The first filesystem error aborts the
    /// remaining files without cleaning up those already written.
    #[instrument(
        skip_all,
        fields(
            protocol = %protocol,
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate_all_components(
        &self,
        protocol: &str,
        output_root: impl AsRef<Path>,
    ) -> VeriscaffResult<Vec<PathBuf>> {
        info!("Generating {} UVM components", protocol.to_uppercase());

        for issue in DomainValidator::protocol_issues(protocol) {
            debug!(field = issue.field, value = %issue.value, "{}", issue.problem);
            self.progress.identifier_issue(&issue);
        }

        let ctx = RenderContext::for_protocol(protocol, self.clock.now());
        let files = self.emit(&ctx, output_root.as_ref())?;

        info!(files = files.len(), "Components generated");
        Ok(files)
    }

    /// Emit with a caller-supplied context, so a project run shares one
    /// timestamp across every file.
    pub(crate) fn emit(&self, ctx: &RenderContext, root: &Path) -> VeriscaffResult<Vec<PathBuf>> {
        ArtifactWriter::new(&*self.filesystem, &*self.progress, root)
            .write_all(&blueprint::COMPONENTS, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::MockFilesystem;
    use crate::application::services::test_support::{FixedClock, NullProgress};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn emitter(fs: MockFilesystem) -> ComponentEmitter {
        ComponentEmitter::new(Arc::new(fs), Arc::new(NullProgress), Arc::new(FixedClock))
    }

    #[test]
    fn writes_seven_files_in_order() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&written);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(7).returning(move |path, _| {
            sink.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });
        fs.expect_set_permissions().never();

        let files = emitter(fs).generate_all_components("AXI4", "out").unwrap();

        let expected: Vec<PathBuf> = [
            "out/verification/common/axi4_transaction.sv",
            "out/verification/uvm/agents/axi4_agent/axi4_driver.sv",
            "out/verification/uvm/agents/axi4_agent/axi4_monitor.sv",
            "out/verification/uvm/agents/axi4_agent/axi4_sequencer.sv",
            "out/verification/uvm/sequences/axi4_base_seq.sv",
            "out/verification/uvm/sequences/axi4_read_seq.sv",
            "out/verification/uvm/sequences/axi4_write_seq.sv",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();

        assert_eq!(files, expected);
        assert_eq!(*written.lock().unwrap(), expected);
    }

    #[test]
    fn stops_at_first_failed_write() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(3).returning(move |path, _| {
            if counter.fetch_add(1, Ordering::SeqCst) == 2 {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let err = emitter(fs)
            .generate_all_components("axi4", "out")
            .unwrap_err();

        assert!(err.to_string().contains("axi4_monitor.sv"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn directory_failure_prevents_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().times(1).returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        assert!(emitter(fs).generate_all_components("spi", "out").is_err());
    }

    #[test]
    fn content_carries_protocol_and_timestamp() {
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&bodies);

        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |_, content| {
            sink.lock().unwrap().push(content.to_string());
            Ok(())
        });

        emitter(fs).generate_all_components("Apb", "out").unwrap();

        let bodies = bodies.lock().unwrap();
        assert!(bodies[0].contains("class apb_transaction"));
        assert!(bodies.iter().all(|b| b.contains(FixedClock::STAMP)));
        assert!(bodies.iter().all(|b| !b.contains("{{")));
    }
}
