//! Console Event Sink
//!
//! Human-readable progress lines on stderr, gated by verbosity.
//! Stdout stays reserved for the final summary.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SplitEvent, SplitEventSink};

/// Event sink that writes progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Progress to stderr. `-v` shows artifact steps, `-vv` every copied file.
    pub fn stderr(verbose: u8) -> Self {
        Self::with_writer(io::stderr(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
        }
    }
}

impl SplitEventSink for ConsoleEventSink {
    fn on_event(&self, event: SplitEvent) {
        match event {
            SplitEvent::Started {
                source,
                artifact_count,
                dry_run,
            } => {
                let mode = if dry_run { " (dry run)" } else { "" };
                self.line(format!(
                    "Splitting {} into {} artifacts{}",
                    source.display(),
                    artifact_count,
                    mode
                ));
            }
            SplitEvent::ArtifactStarted {
                name, kind, target, ..
            } => {
                self.line(format!("[{}] {} -> {}", name, kind, target.display()));
            }
            SplitEvent::TargetCleared {
                target, existed, ..
            } => {
                if existed {
                    self.line(format!("  removed {}", target.display()));
                }
            }
            SplitEvent::FileCopied { path, .. } => {
                self.line(format!("    {}", path.display()));
            }
            SplitEvent::TreeCopied {
                files, excluded, ..
            } => {
                if excluded > 0 {
                    self.line(format!("  copied {} files ({} excluded)", files, excluded));
                } else {
                    self.line(format!("  copied {} files", files));
                }
            }
            SplitEvent::EntryPatched { entry, .. } => {
                self.line(format!("  patched {}", entry.display()));
            }
            SplitEvent::ArtifactCompleted { digest, .. } => {
                self.line(format!("  digest {}", digest.short()));
            }
            SplitEvent::Completed { .. } => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose >= 2
    }
}
