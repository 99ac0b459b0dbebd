//! Check Use Case
//!
//! Verifies artifacts already on disk against their definitions and,
//! when the build output is still around, against a fresh plan.

use std::path::PathBuf;

use crate::domain::entities::{AppFlags, ArtifactSet, ArtifactSpec, FlagsParseError};
use crate::domain::ports::FileSystem;
use crate::domain::services::{html_patch, SplitPlan, SplitPlanner};
use crate::error::SplitResult;

/// A single problem with one artifact
#[derive(Debug, Clone, PartialEq)]
pub enum CheckFinding {
    /// Target directory does not exist
    MissingTarget { target: PathBuf },
    /// Entry HTML missing from the target
    MissingEntry { entry: PathBuf },
    /// Flags block absent, duplicated, or unreadable
    UnreadableFlags { error: FlagsParseError },
    /// Flags block readable but different from the definition
    FlagsMismatch { expected: AppFlags, actual: AppFlags },
    /// Title differs from the definition
    TitleMismatch {
        expected: String,
        actual: Option<String>,
    },
    /// Entry HTML differs from what a split would write now
    ContentDrift {
        entry: PathBuf,
        expected: String,
        actual: String,
    },
}

impl CheckFinding {
    /// Short description for reports
    pub fn message(&self) -> String {
        match self {
            CheckFinding::MissingTarget { target } => {
                format!("target directory missing: {}", target.display())
            }
            CheckFinding::MissingEntry { entry } => {
                format!("entry file missing: {}", entry.display())
            }
            CheckFinding::UnreadableFlags { error } => format!("flags block: {}", error),
            CheckFinding::FlagsMismatch { expected, actual } => format!(
                "flags differ: expected {} {:?}, found {} {:?}",
                expected.app_type, expected.blocked_routes, actual.app_type, actual.blocked_routes
            ),
            CheckFinding::TitleMismatch { expected, actual } => match actual {
                Some(actual) => format!("title is '{}', expected '{}'", actual, expected),
                None => format!("no title, expected '{}'", expected),
            },
            CheckFinding::ContentDrift { .. } => {
                "entry file differs from the build output".to_string()
            }
        }
    }

    /// Machine-readable kind, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CheckFinding::MissingTarget { .. } => "missing_target",
            CheckFinding::MissingEntry { .. } => "missing_entry",
            CheckFinding::UnreadableFlags { .. } => "unreadable_flags",
            CheckFinding::FlagsMismatch { .. } => "flags_mismatch",
            CheckFinding::TitleMismatch { .. } => "title_mismatch",
            CheckFinding::ContentDrift { .. } => "content_drift",
        }
    }
}

/// Findings for one artifact
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactCheck {
    pub name: String,
    pub target: PathBuf,
    pub findings: Vec<CheckFinding>,
}

impl ArtifactCheck {
    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Result of the check operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    pub artifacts: Vec<ArtifactCheck>,
    /// Whether the build output was available for the content comparison
    pub compared_with_build: bool,
}

impl CheckReport {
    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.artifacts.iter().all(ArtifactCheck::is_ok)
    }

    pub fn finding_count(&self) -> usize {
        self.artifacts.iter().map(|a| a.findings.len()).sum()
    }
}

/// Check use case, parameterized by its file system port
pub struct CheckUseCase<FS: FileSystem> {
    file_system: FS,
    planner: SplitPlanner,
    artifacts: ArtifactSet,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(file_system: FS, planner: SplitPlanner, artifacts: ArtifactSet) -> Self {
        Self {
            file_system,
            planner,
            artifacts,
        }
    }

    /// Check every artifact.
    ///
    /// Errors only when the build output exists but cannot be planned;
    /// everything wrong with the artifacts themselves is a finding.
    pub fn execute(&self) -> SplitResult<CheckReport> {
        let plan = self.current_plan()?;

        let artifacts = self
            .artifacts
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let expected = plan
                    .as_ref()
                    .and_then(|p| p.artifacts.get(index))
                    .map(|a| a.entry_html.as_str());
                self.check_artifact(spec, expected)
            })
            .collect();

        Ok(CheckReport {
            artifacts,
            compared_with_build: plan.is_some(),
        })
    }

    fn current_plan(&self) -> SplitResult<Option<SplitPlan>> {
        let entry = self.planner.source_entry();
        if !self.file_system.is_dir(&self.planner.source()) || !self.file_system.exists(&entry) {
            return Ok(None);
        }
        let html = self.file_system.read(&entry)?;
        self.planner.plan(&self.artifacts, &html).map(Some)
    }

    fn check_artifact(&self, spec: &ArtifactSpec, expected_html: Option<&str>) -> ArtifactCheck {
        let target = self.planner.target(spec);
        let mut findings = Vec::new();

        let entry = target.join(self.planner.entry());
        if !self.file_system.is_dir(&target) {
            findings.push(CheckFinding::MissingTarget {
                target: target.clone(),
            });
        } else if let Ok(html) = self.file_system.read(&entry) {
            match AppFlags::parse_block(&html) {
                Ok(actual) => {
                    let expected = spec.flags();
                    if actual != expected {
                        findings.push(CheckFinding::FlagsMismatch { expected, actual });
                    }
                }
                Err(error) => findings.push(CheckFinding::UnreadableFlags { error }),
            }

            let title = html_patch::title(&html);
            if title != Some(spec.title.as_str()) {
                findings.push(CheckFinding::TitleMismatch {
                    expected: spec.title.clone(),
                    actual: title.map(str::to_string),
                });
            }

            if let Some(expected) = expected_html {
                if expected != html {
                    findings.push(CheckFinding::ContentDrift {
                        entry: entry.clone(),
                        expected: expected.to_string(),
                        actual: html,
                    });
                }
            }
        } else {
            findings.push(CheckFinding::MissingEntry { entry });
        }

        ArtifactCheck {
            name: spec.name.clone(),
            target,
            findings,
        }
    }
}
