//! Application layer for veriscaff.
//!
//! This layer contains:
//! - **Services**: `ComponentEmitter` and `ProjectScaffolder`
//! - **Ports**: Interface definitions (traits) for filesystem, progress and clock
//! - **Errors**: Application-specific error types
//!
//! Services sequence the domain blueprint onto the ports. What gets written,
//! and where, is decided in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ComponentEmitter, GenerationReport, ProjectScaffolder};

pub use ports::{Clock, Filesystem, ProgressReporter};

pub use error::ApplicationError;
