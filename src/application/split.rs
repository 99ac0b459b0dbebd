//! Split Use Case
//!
//! Orchestrates the split flow:
//! 1. Verify the build output and read its entry HTML
//! 2. Plan every artifact in memory (title + flags block)
//! 3. Execute: clear, copy, write entry, digest, per artifact
//!
//! Planning never touches the file system beyond reads, so any input
//! problem aborts before a target directory is removed.

use std::path::PathBuf;

use crate::domain::entities::ArtifactSet;
use crate::domain::ports::{FileSystem, SplitEvent, SplitEventSink};
use crate::domain::services::{SplitPlan, SplitPlanner};
use crate::domain::value_objects::{ArtifactKind, ContentHash, ExcludePatterns};
use crate::error::{SplitError, SplitResult};

/// One artifact as produced on disk
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactOutcome {
    pub name: String,
    pub kind: ArtifactKind,
    pub target: PathBuf,
    pub digest: ContentHash,
    pub files: usize,
}

/// Result of a completed split
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitOutcome {
    pub artifacts: Vec<ArtifactOutcome>,
}

/// Split use case, parameterized by its file system port
pub struct SplitUseCase<FS: FileSystem> {
    file_system: FS,
    planner: SplitPlanner,
    artifacts: ArtifactSet,
    exclude: ExcludePatterns,
}

impl<FS: FileSystem> SplitUseCase<FS> {
    pub fn new(
        file_system: FS,
        planner: SplitPlanner,
        artifacts: ArtifactSet,
        exclude: ExcludePatterns,
    ) -> Self {
        Self {
            file_system,
            planner,
            artifacts,
            exclude,
        }
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    /// Read the build output and compute every artifact's entry HTML.
    pub fn plan(&self) -> SplitResult<SplitPlan> {
        let source = self.planner.source();
        if !self.file_system.is_dir(&source) {
            return Err(SplitError::MissingBuild { path: source });
        }

        let entry = self.planner.source_entry();
        if !self.file_system.exists(&entry) || self.file_system.is_dir(&entry) {
            return Err(SplitError::MissingEntry { path: entry });
        }

        let html = self.file_system.read(&entry)?;
        self.planner.plan(&self.artifacts, &html)
    }

    /// Report a plan without touching anything.
    pub fn preview(&self, plan: &SplitPlan, sink: &dyn SplitEventSink) {
        sink.on_event(SplitEvent::Started {
            source: plan.source.clone(),
            artifact_count: plan.artifacts.len(),
            dry_run: true,
        });
        for (index, artifact) in plan.artifacts.iter().enumerate() {
            sink.on_event(SplitEvent::ArtifactStarted {
                index,
                name: artifact.spec.name.clone(),
                kind: artifact.spec.kind,
                target: artifact.target.clone(),
            });
        }
        sink.on_event(SplitEvent::Completed {
            artifact_count: plan.artifacts.len(),
        });
    }

    /// Write every planned artifact, in order.
    ///
    /// The caller holds the run lock.
    pub fn execute(&self, plan: &SplitPlan, sink: &dyn SplitEventSink) -> SplitResult<SplitOutcome> {
        sink.on_event(SplitEvent::Started {
            source: plan.source.clone(),
            artifact_count: plan.artifacts.len(),
            dry_run: false,
        });

        let detailed = sink.wants_detailed_events();
        let mut outcome = SplitOutcome::default();

        for (index, artifact) in plan.artifacts.iter().enumerate() {
            let spec = &artifact.spec;
            sink.on_event(SplitEvent::ArtifactStarted {
                index,
                name: spec.name.clone(),
                kind: spec.kind,
                target: artifact.target.clone(),
            });

            let existed = self.file_system.remove_dir_all(&artifact.target)?;
            sink.on_event(SplitEvent::TargetCleared {
                index,
                target: artifact.target.clone(),
                existed,
            });

            let mut on_file = |path: &std::path::Path| {
                if detailed {
                    sink.on_event(SplitEvent::FileCopied {
                        index,
                        path: path.to_path_buf(),
                    });
                }
            };
            let stats = self.file_system.copy_tree(
                &plan.source,
                &artifact.target,
                &self.exclude,
                &mut on_file,
            )?;
            sink.on_event(SplitEvent::TreeCopied {
                index,
                files: stats.files,
                excluded: stats.excluded,
            });

            self.file_system
                .write(&artifact.entry_path, &artifact.entry_html)?;
            sink.on_event(SplitEvent::EntryPatched {
                index,
                entry: artifact.entry_path.clone(),
            });

            let digest = self.file_system.hash_tree(&artifact.target)?;
            sink.on_event(SplitEvent::ArtifactCompleted {
                index,
                name: spec.name.clone(),
                target: artifact.target.clone(),
                digest: digest.clone(),
            });

            outcome.artifacts.push(ArtifactOutcome {
                name: spec.name.clone(),
                kind: spec.kind,
                target: artifact.target.clone(),
                digest,
                files: stats.files,
            });
        }

        sink.on_event(SplitEvent::Completed {
            artifact_count: outcome.artifacts.len(),
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FLAGS_START;
    use crate::domain::ports::file_system::mock::MockFileSystem;
    use crate::domain::ports::split_events::recording::RecordingEventSink;
    use crate::domain::ports::NoopEventSink;
    use std::path::Path;

    const BASE: &str = "<html><head><title>Foo</title></head><body></body></html>";

    fn use_case(fs: &MockFileSystem) -> SplitUseCase<MockFileSystem> {
        SplitUseCase::new(
            fs.clone(),
            SplitPlanner::new("/w", "dist", "index.html"),
            ArtifactSet::default(),
            ExcludePatterns::empty(),
        )
    }

    fn seeded() -> MockFileSystem {
        let fs = MockFileSystem::new();
        fs.add_file("/w/dist/index.html", BASE);
        fs.add_file("/w/dist/assets/app.js", "console.log(1)");
        fs
    }

    #[test]
    fn missing_build_fails_before_anything_else() {
        let fs = MockFileSystem::new();
        let err = use_case(&fs).plan().unwrap_err();
        match err {
            SplitError::MissingBuild { path } => assert_eq!(path, Path::new("/w/dist")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(fs.files_under("/w").is_empty());
    }

    #[test]
    fn missing_entry_is_reported() {
        let fs = MockFileSystem::new();
        fs.add_file("/w/dist/other.html", BASE);
        let err = use_case(&fs).plan().unwrap_err();
        assert!(matches!(err, SplitError::MissingEntry { .. }));
    }

    #[test]
    fn execute_produces_both_artifacts() {
        let fs = seeded();
        let uc = use_case(&fs);
        let plan = uc.plan().unwrap();
        let outcome = uc.execute(&plan, &NoopEventSink).unwrap();

        assert_eq!(outcome.artifacts.len(), 2);
        assert_eq!(outcome.artifacts[0].name, "console");
        assert_eq!(outcome.artifacts[0].files, 2);

        let console = fs.file("/w/dist-console/index.html").unwrap();
        assert!(console.contains("<title>GreenFlow - API Console</title>"));
        assert!(console.contains("window.__APP_TYPE__ = \"console\""));
        assert_eq!(
            fs.file("/w/dist-landing/assets/app.js").as_deref(),
            Some("console.log(1)")
        );
        assert_eq!(fs.file("/w/dist/index.html").as_deref(), Some(BASE));
    }

    #[test]
    fn execute_replaces_stale_target_content() {
        let fs = seeded();
        fs.add_file("/w/dist-console/stale.txt", "old");
        let uc = use_case(&fs);
        let plan = uc.plan().unwrap();
        uc.execute(&plan, &NoopEventSink).unwrap();

        assert!(fs.file("/w/dist-console/stale.txt").is_none());
    }

    #[test]
    fn rerun_is_idempotent() {
        let fs = seeded();
        let uc = use_case(&fs);
        let first = uc.execute(&uc.plan().unwrap(), &NoopEventSink).unwrap();
        let second = uc.execute(&uc.plan().unwrap(), &NoopEventSink).unwrap();

        assert_eq!(first, second);
        let html = fs.file("/w/dist-console/index.html").unwrap();
        assert_eq!(html.matches(FLAGS_START).count(), 1);
    }

    #[test]
    fn malformed_entry_touches_nothing() {
        let fs = MockFileSystem::new();
        fs.add_file("/w/dist/index.html", "<html><head></head></html>");
        fs.add_file("/w/dist-console/keep.txt", "previous run");

        let err = use_case(&fs).plan().unwrap_err();
        assert!(matches!(err, SplitError::MissingTitle { .. }));
        assert_eq!(
            fs.file("/w/dist-console/keep.txt").as_deref(),
            Some("previous run")
        );
    }

    #[test]
    fn write_failure_propagates() {
        let fs = seeded();
        fs.fail_write("/w/dist-console/index.html");
        let uc = use_case(&fs);
        let plan = uc.plan().unwrap();

        let err = uc.execute(&plan, &NoopEventSink).unwrap_err();
        assert!(matches!(err, SplitError::Fs(_)));
        assert!(fs.files_under("/w/dist-landing").is_empty());
    }

    #[test]
    fn events_follow_artifact_order() {
        let fs = seeded();
        let uc = use_case(&fs);
        let sink = RecordingEventSink::default();
        uc.execute(&uc.plan().unwrap(), &sink).unwrap();

        let events = sink.take();
        assert!(matches!(
            events.first(),
            Some(SplitEvent::Started { artifact_count: 2, dry_run: false, .. })
        ));
        assert!(matches!(
            events.last(),
            Some(SplitEvent::Completed { artifact_count: 2 })
        ));
        let started: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                SplitEvent::ArtifactStarted { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(started, ["console", "landing"]);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SplitEvent::FileCopied { .. })));
    }

    #[test]
    fn detailed_sink_sees_each_file() {
        let fs = seeded();
        let uc = use_case(&fs);
        let sink = RecordingEventSink::detailed();
        uc.execute(&uc.plan().unwrap(), &sink).unwrap();

        let copied = sink
            .take()
            .into_iter()
            .filter(|e| matches!(e, SplitEvent::FileCopied { .. }))
            .count();
        assert_eq!(copied, 4);
    }

    #[test]
    fn preview_writes_nothing() {
        let fs = seeded();
        let uc = use_case(&fs);
        let sink = RecordingEventSink::default();
        let plan = uc.plan().unwrap();
        uc.preview(&plan, &sink);

        assert!(fs.files_under("/w/dist-console").is_empty());
        assert!(matches!(
            sink.take().first(),
            Some(SplitEvent::Started { dry_run: true, .. })
        ));
    }
}
