//! Application ports (traits) for external dependencies.
//!
//! Adapters in `veriscaff-adapters` and `veriscaff-cli` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file creation
//!   - `ProgressReporter`: Per-step, per-directory and per-file notifications
//!   - `Clock`: Generation timestamp
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{Clock, Filesystem, ProgressReporter};

#[cfg(test)]
pub use output::MockFilesystem;
