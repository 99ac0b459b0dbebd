//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and the run lock
//! - `events/` - Event sinks (console progress, NDJSON)

pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalFs, SplitLock};
