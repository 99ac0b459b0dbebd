//! Split Event Port
//!
//! Provides an observable interface for split operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::{ArtifactKind, ContentHash};

/// Event emitted during split operations
#[derive(Debug, Clone, PartialEq)]
pub enum SplitEvent {
    /// Split started (plan computed)
    Started {
        source: PathBuf,
        artifact_count: usize,
        dry_run: bool,
    },

    /// Work on one artifact began
    ArtifactStarted {
        index: usize,
        name: String,
        kind: ArtifactKind,
        target: PathBuf,
    },

    /// Previous target directory removed
    TargetCleared {
        index: usize,
        target: PathBuf,
        existed: bool,
    },

    /// One file copied from the build output
    FileCopied { index: usize, path: PathBuf },

    /// Build output copied into the target
    TreeCopied {
        index: usize,
        files: usize,
        excluded: usize,
    },

    /// Entry HTML rewritten with title and flags block
    EntryPatched { index: usize, entry: PathBuf },

    /// Artifact finished
    ArtifactCompleted {
        index: usize,
        name: String,
        target: PathBuf,
        digest: ContentHash,
    },

    /// Split completed
    Completed { artifact_count: usize },
}

/// Trait for receiving split events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines on stderr
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait SplitEventSink {
    /// Handle a split event
    fn on_event(&self, event: SplitEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SplitEventSink for NoopEventSink {
    fn on_event(&self, _event: SplitEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
