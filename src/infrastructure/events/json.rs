//! JSON Event Sink
//!
//! Outputs split events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SplitEvent, SplitEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Render one event as a JSON object
pub fn event_json(event: &SplitEvent) -> serde_json::Value {
    match event {
        SplitEvent::Started {
            source,
            artifact_count,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "split",
            "source": source.display().to_string(),
            "artifact_count": artifact_count,
            "dry_run": dry_run,
        }),

        SplitEvent::ArtifactStarted {
            index,
            name,
            kind,
            target,
        } => serde_json::json!({
            "event": "artifact_start",
            "command": "split",
            "index": index,
            "name": name,
            "kind": kind.as_str(),
            "target": target.display().to_string(),
        }),

        SplitEvent::TargetCleared {
            index,
            target,
            existed,
        } => serde_json::json!({
            "event": "target_cleared",
            "command": "split",
            "index": index,
            "target": target.display().to_string(),
            "existed": existed,
        }),

        SplitEvent::FileCopied { index, path } => serde_json::json!({
            "event": "file_copied",
            "command": "split",
            "index": index,
            "path": path.display().to_string(),
        }),

        SplitEvent::TreeCopied {
            index,
            files,
            excluded,
        } => serde_json::json!({
            "event": "tree_copied",
            "command": "split",
            "index": index,
            "files": files,
            "excluded": excluded,
        }),

        SplitEvent::EntryPatched { index, entry } => serde_json::json!({
            "event": "entry_patched",
            "command": "split",
            "index": index,
            "entry": entry.display().to_string(),
        }),

        SplitEvent::ArtifactCompleted {
            index,
            name,
            target,
            digest,
        } => serde_json::json!({
            "event": "artifact_complete",
            "command": "split",
            "index": index,
            "name": name,
            "target": target.display().to_string(),
            "digest": digest.as_str(),
        }),

        SplitEvent::Completed { artifact_count } => serde_json::json!({
            "event": "complete",
            "command": "split",
            "status": "success",
            "artifacts": artifact_count,
        }),
    }
}

impl SplitEventSink for JsonEventSink {
    fn on_event(&self, event: SplitEvent) {
        self.write_event(event_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
