//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ArtifactSet, ArtifactSpec};
use crate::domain::value_objects::ExcludePatterns;
use crate::error::{SplitError, SplitResult};

use super::loader::{self, ConfigWarning};

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "distsplit.toml";

/// Build output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base build output directory, relative to the working directory
    #[serde(default = "default_source_dir")]
    pub dir: String,

    /// Entry HTML file, relative to the build output root
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Gitignore-style patterns not copied into artifacts
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: default_source_dir(),
            entry: default_entry(),
            exclude: Vec::new(),
        }
    }
}

fn default_source_dir() -> String {
    "dist".to_string()
}

fn default_entry() -> String {
    "index.html".to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Replaces the built-in console/landing table when non-empty
    #[serde(default)]
    pub artifacts: Vec<ArtifactSpec>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SplitResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SplitResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `explicit`, or `<root>/distsplit.toml` when present, or defaults.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> SplitResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(root, explicit)
    }

    /// Apply environment variable overrides (DISTSPLIT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Artifact definitions, built-in unless overridden
    pub fn artifact_set(&self) -> SplitResult<ArtifactSet> {
        if self.artifacts.is_empty() {
            Ok(ArtifactSet::default())
        } else {
            ArtifactSet::new(self.artifacts.clone())
        }
    }

    /// Compiled exclude patterns, rooted at the build output directory
    pub fn exclude_patterns(&self, root: &Path) -> SplitResult<ExcludePatterns> {
        let source = root.join(&self.source.dir);
        ExcludePatterns::new(&source, &self.source.exclude).map_err(|e| {
            SplitError::InvalidConfig {
                file: root.join(CONFIG_FILE_NAME),
                message: e.to_string(),
            }
        })
    }
}
