//! ArtifactKind value object - which deployable flavour an artifact is

use serde::{Deserialize, Serialize};

/// Artifact type tag embedded into the entry HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// API developer console
    Console,
    /// Marketing landing site
    Landing,
}

impl ArtifactKind {
    /// Every kind, in the order artifacts are produced by default
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Console, ArtifactKind::Landing];

    /// Tag written into `window.__APP_TYPE__`
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Console => "console",
            ArtifactKind::Landing => "landing",
        }
    }

    /// Parse a tag, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "console" => Some(ArtifactKind::Console),
            "landing" => Some(ArtifactKind::Landing),
            _ => None,
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
