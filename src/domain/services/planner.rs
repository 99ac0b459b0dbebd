//! Split planning service
//!
//! Pure domain logic: given the base entry HTML and the artifact set,
//! compute every artifact's patched entry file in memory. Nothing is
//! written until the whole plan has been computed, so malformed input
//! aborts before any target directory is touched.

use std::path::{Component, Path, PathBuf};

use super::html_patch::{self, PatchError};
use crate::domain::entities::{ArtifactSet, ArtifactSpec};
use crate::error::{SplitError, SplitResult};

/// One artifact, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedArtifact {
    pub spec: ArtifactSpec,
    /// Target directory (root-joined)
    pub target: PathBuf,
    /// Entry file inside the target
    pub entry_path: PathBuf,
    /// Patched entry HTML
    pub entry_html: String,
}

/// The full split, computed before any mutation
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPlan {
    /// Base build output directory (root-joined)
    pub source: PathBuf,
    /// Entry file name, relative to each artifact root
    pub entry: PathBuf,
    pub artifacts: Vec<PlannedArtifact>,
}

/// Planner for a fixed directory layout
#[derive(Debug, Clone)]
pub struct SplitPlanner {
    root: PathBuf,
    source_dir: String,
    entry: String,
}

impl SplitPlanner {
    pub fn new(root: impl Into<PathBuf>, source_dir: &str, entry: &str) -> Self {
        Self {
            root: root.into(),
            source_dir: source_dir.to_string(),
            entry: entry.to_string(),
        }
    }

    /// Base build output directory
    pub fn source(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Entry file name, relative to every artifact root
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Entry file inside the base directory
    pub fn source_entry(&self) -> PathBuf {
        self.source().join(&self.entry)
    }

    /// Target directory for an artifact
    pub fn target(&self, spec: &ArtifactSpec) -> PathBuf {
        self.root.join(&spec.dir)
    }

    /// Reject targets that equal, contain, or sit inside the base directory.
    ///
    /// Both sides are resolved lexically against the working directory, so
    /// `x/../dist` and an absolute spelling of the base are caught too.
    pub fn check_layout(&self, artifacts: &ArtifactSet) -> SplitResult<()> {
        let source = resolve(&self.source());
        for spec in artifacts {
            let target = resolve(&self.target(spec));
            if target.starts_with(&source) || source.starts_with(&target) {
                return Err(SplitError::TargetOverlapsSource {
                    target: PathBuf::from(&spec.dir),
                    source_dir: PathBuf::from(&self.source_dir),
                });
            }
        }
        Ok(())
    }

    /// Compute the plan from the base entry HTML.
    pub fn plan(&self, artifacts: &ArtifactSet, base_html: &str) -> SplitResult<SplitPlan> {
        self.check_layout(artifacts)?;

        let source_entry = self.source_entry();
        let planned = artifacts
            .iter()
            .map(|spec| {
                let target = self.target(spec);
                Ok(PlannedArtifact {
                    spec: spec.clone(),
                    entry_path: target.join(&self.entry),
                    target,
                    entry_html: patch_entry(spec, base_html, &source_entry)?,
                })
            })
            .collect::<SplitResult<Vec<_>>>()?;

        Ok(SplitPlan {
            source: self.source(),
            entry: PathBuf::from(&self.entry),
            artifacts: planned,
        })
    }
}

/// Apply title and flags block for one artifact.
///
/// `file` is only used for error reporting.
pub fn patch_entry(spec: &ArtifactSpec, html: &str, file: &Path) -> SplitResult<String> {
    let titled = html_patch::replace_title(html, &spec.title).map_err(|e| into_split(e, file))?;
    html_patch::upsert_block(&titled, &spec.flags().render_block())
        .map_err(|e| into_split(e, file))
}

fn into_split(err: PatchError, file: &Path) -> SplitError {
    let file = file.to_path_buf();
    match err {
        PatchError::MissingTitle => SplitError::MissingTitle { file },
        PatchError::MissingHead => SplitError::MissingHead { file },
        PatchError::Malformed(msg) => SplitError::MalformedFlagsBlock {
            file,
            message: msg.to_string(),
        },
    }
}

/// Drop `.` and fold `..` into its parent without touching the disk.
fn resolve(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
