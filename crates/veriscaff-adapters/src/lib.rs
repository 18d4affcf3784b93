//! Infrastructure adapters for veriscaff.
//!
//! This crate implements the ports defined in `veriscaff-core::application::ports`.
//! It contains the I/O the core stays free of.

pub mod clock;
pub mod filesystem;
pub mod progress;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use progress::{ProgressEvent, RecordingProgress, SilentProgress};
