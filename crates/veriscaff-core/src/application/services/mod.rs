//! Application services.

mod component_emitter;
mod project_scaffolder;
mod writer;

pub use component_emitter::ComponentEmitter;
pub use project_scaffolder::{GenerationReport, ProjectScaffolder};
