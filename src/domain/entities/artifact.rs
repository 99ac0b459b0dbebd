//! Artifact definitions
//!
//! One definition per deployable copy of the build output.

use std::collections::HashSet;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use super::flags::AppFlags;
use crate::domain::value_objects::ArtifactKind;
use crate::error::{SplitError, SplitResult};

/// A deployable copy of the build output and the flags it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Artifact name, used in reports and `distsplit flags <name>`
    pub name: String,
    /// Target directory, relative to the working directory
    pub dir: String,
    pub kind: ArtifactKind,
    /// Route prefixes the client must refuse to render, in order
    #[serde(default)]
    pub blocked_routes: Vec<String>,
    /// Text for the `<title>` element
    pub title: String,
}

impl ArtifactSpec {
    pub fn new(
        name: impl Into<String>,
        dir: impl Into<String>,
        kind: ArtifactKind,
        blocked_routes: &[&str],
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            kind,
            blocked_routes: blocked_routes.iter().map(|r| r.to_string()).collect(),
            title: title.into(),
        }
    }

    /// The API console artifact
    pub fn console() -> Self {
        Self::new(
            "console",
            "dist-console",
            ArtifactKind::Console,
            &["/", "/shipper", "/carrier", "/owner"],
            "GreenFlow - API Console",
        )
    }

    /// The marketing landing artifact
    pub fn landing() -> Self {
        Self::new(
            "landing",
            "dist-landing",
            ArtifactKind::Landing,
            &["/console"],
            "GreenFlow - Green Logistics Platform",
        )
    }

    /// Flags embedded into this artifact's entry HTML
    pub fn flags(&self) -> AppFlags {
        AppFlags::new(self.kind, self.blocked_routes.clone())
    }
}

/// Validated, ordered set of artifact definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet(Vec<ArtifactSpec>);

impl Default for ArtifactSet {
    fn default() -> Self {
        Self(vec![ArtifactSpec::console(), ArtifactSpec::landing()])
    }
}

impl ArtifactSet {
    /// Build a set, rejecting empty or duplicate names and directories.
    pub fn new(specs: Vec<ArtifactSpec>) -> SplitResult<Self> {
        let mut names = HashSet::new();
        let mut dirs = HashSet::new();

        for spec in &specs {
            if spec.name.trim().is_empty() || spec.dir.trim().is_empty() {
                return Err(SplitError::InvalidArtifact {
                    name: spec.name.clone(),
                    message: "name and dir must not be empty".to_string(),
                });
            }
            check_dir(spec)?;
            check_text(spec)?;
            if !names.insert(spec.name.as_str()) {
                return Err(SplitError::InvalidArtifact {
                    name: spec.name.clone(),
                    message: "defined more than once".to_string(),
                });
            }
            if !dirs.insert(normalize_dir(&spec.dir)) {
                return Err(SplitError::DuplicateTarget {
                    dir: spec.dir.clone(),
                });
            }
        }

        Ok(Self(specs))
    }

    /// Skip validation, so layout checks can be exercised on their own.
    #[cfg(test)]
    pub(crate) fn from_unchecked(specs: Vec<ArtifactSpec>) -> Self {
        Self(specs)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtifactSpec> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> SplitResult<&ArtifactSpec> {
        self.0
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SplitError::UnknownArtifact {
                name: name.to_string(),
            })
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a ArtifactSpec;
    type IntoIter = std::slice::Iter<'a, ArtifactSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn invalid(spec: &ArtifactSpec, message: impl Into<String>) -> SplitError {
    SplitError::InvalidArtifact {
        name: spec.name.clone(),
        message: message.into(),
    }
}

/// Target dirs stay inside the working directory: relative, no `..`.
fn check_dir(spec: &ArtifactSpec) -> SplitResult<()> {
    let path = Path::new(&spec.dir);
    if path.is_absolute() || path.has_root() || spec.dir.starts_with(['/', '\\']) {
        return Err(invalid(spec, format!("dir '{}' must be relative", spec.dir)));
    }
    let traverses = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        || spec.dir.split(['/', '\\']).any(|seg| seg == "..");
    if traverses {
        return Err(invalid(
            spec,
            format!("dir '{}' must not contain '..'", spec.dir),
        ));
    }
    Ok(())
}

/// Routes and title are written verbatim into the entry HTML, so they must
/// not be able to open a tag or close the script.
fn check_text(spec: &ArtifactSpec) -> SplitResult<()> {
    for route in &spec.blocked_routes {
        if !route.starts_with('/') {
            return Err(invalid(
                spec,
                format!("blocked route '{}' must start with '/'", route),
            ));
        }
        if route.contains('<') || route.chars().any(char::is_control) {
            return Err(invalid(
                spec,
                format!("blocked route {:?} contains '<' or a control character", route),
            ));
        }
    }
    if spec.title.contains('<') {
        return Err(invalid(spec, "title must not contain '<'"));
    }
    Ok(())
}

/// Lexical normalization: drop `.` segments and trailing slashes.
pub fn normalize_dir(dir: &str) -> String {
    dir.split(['/', '\\'])
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}
