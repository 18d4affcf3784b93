//! Veriscaff Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the veriscaff
//! verification-project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          veriscaff-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ComponentEmitter, ProjectScaffolder)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Progress, Clock)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    veriscaff-adapters (Infrastructure)  │
//! │ (LocalFilesystem, MemoryFilesystem, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationRequest, RenderContext,      │
//! │  template catalog, blueprint)           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use veriscaff_core::prelude::*;
//!
//! # fn run(
//! #     filesystem: Arc<dyn Filesystem>,
//! #     progress: Arc<dyn ProgressReporter>,
//! #     clock: Arc<dyn Clock>,
//! # ) -> VeriscaffResult<()> {
//! let request = GenerationRequest::builder("DemoBus")
//!     .protocol("AXI4")
//!     .simulator("dsim")
//!     .build()?;
//!
//! let scaffolder = ProjectScaffolder::new(request, ".", filesystem, progress, clock);
//! let report = scaffolder.generate_project()?;
//! println!("{} files written", report.files.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentEmitter, GenerationReport, ProjectScaffolder,
        ports::{Clock, Filesystem, ProgressReporter},
    };
    pub use crate::domain::{
        GenerationRequest, GenerationRequestBuilder, IdentifierIssue, RenderContext, ScaffoldStep,
    };
    pub use crate::error::{VeriscaffError, VeriscaffResult};
}

/// Version stamped into generated documentation.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
