//! Core domain layer for veriscaff.
//!
//! Pure logic: the generation request, the substitution table, the embedded
//! template catalog and the project blueprint. All I/O happens behind ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem or clock access
//! - **No tracing**: Observability belongs to the application and CLI layers
//! - **Immutable values**: Requests and contexts are built once per run

pub mod artifact;
pub mod blueprint;
pub mod catalog;
pub mod common;
pub mod error;
pub mod render_context;
pub mod request;

mod validation;

pub use artifact::{Artifact, ArtifactSpec};
pub use blueprint::{ScaffoldStep, directory_skeleton};
pub use common::{FileMode, RelativePath};
pub use error::DomainError;
pub use render_context::RenderContext;
pub use request::{
    DEFAULT_PROTOCOL, DEFAULT_SIMULATOR, GenerationRequest, GenerationRequestBuilder, title_case,
};
pub use validation::{DomainValidator, IdentifierIssue};
