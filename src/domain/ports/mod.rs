//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod split_events;

pub use file_system::{CopyStats, FileSystem, FsError, FsResult};
pub use split_events::{NoopEventSink, SplitEvent, SplitEventSink};
