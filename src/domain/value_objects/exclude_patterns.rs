//! Exclude patterns value object
//!
//! Gitignore-style patterns for build output files that must not be copied
//! into the artifacts (source maps, stats files, ...).

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use thiserror::Error;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 256;

/// Compiled exclude patterns, matched relative to the build output root.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    patterns: Vec<String>,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExcludePatterns {
    /// Pattern set that matches nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            patterns: Vec::new(),
        }
    }

    /// Compile patterns rooted at `root`.
    pub fn new(root: &Path, patterns: &[String]) -> Result<Self, ExcludeError> {
        if patterns.len() > MAX_PATTERNS {
            return Err(ExcludeError::TooManyPatterns {
                count: patterns.len(),
                limit: MAX_PATTERNS,
            });
        }

        let mut builder = GitignoreBuilder::new(root);
        let mut kept = Vec::new();
        for pattern in patterns {
            let trimmed = pattern.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, trimmed)
                .map_err(|e| ExcludeError::InvalidPattern {
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                })?;
            kept.push(trimmed.to_string());
        }

        let matcher = builder
            .build()
            .map_err(|e| ExcludeError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            patterns: kept,
        })
    }

    /// Check if a path (relative to the build output root) is excluded.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// The patterns as configured (comments and blanks dropped).
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Errors from compiling exclude patterns.
#[derive(Debug, Error)]
pub enum ExcludeError {
    #[error("{count} exclude patterns exceed the limit of {limit}")]
    TooManyPatterns { count: usize, limit: usize },

    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to build exclude matcher: {0}")]
    BuildFailed(String),
}

/// Relative path helper used by walkers.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
