//! Error types for distsplit
//!
//! Library code returns [`SplitError`]; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::FlagsParseError;
use crate::domain::ports::FsError;

/// Result type alias for split operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Main error type for split operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Base build output directory does not exist
    #[error("build output not found at {path} - run the build first (npm run build)")]
    MissingBuild { path: PathBuf },

    /// Entry HTML file missing from the build output
    #[error("entry file not found: {path}")]
    MissingEntry { path: PathBuf },

    /// Entry HTML has no `<title>...</title>` element
    #[error("no <title> element in {file}")]
    MissingTitle { file: PathBuf },

    /// Entry HTML has no `<head>` tag to anchor the flags block
    #[error("no <head> tag in {file} - cannot place the flags block")]
    MissingHead { file: PathBuf },

    /// Start marker without end marker, or markers out of order
    #[error("malformed flags block in {file}: {message}")]
    MalformedFlagsBlock { file: PathBuf, message: String },

    /// Flags block present but its values do not parse
    #[error("invalid flags in {file}: {message}")]
    InvalidFlags { file: PathBuf, message: String },

    /// Target directory would clobber the base directory
    #[error("target '{target}' overlaps build output '{source_dir}'")]
    TargetOverlapsSource { target: PathBuf, source_dir: PathBuf },

    /// Two artifacts share a target directory
    #[error("target directory '{dir}' is used by more than one artifact")]
    DuplicateTarget { dir: String },

    /// Artifact definition rejected
    #[error("invalid artifact '{name}': {message}")]
    InvalidArtifact { name: String, message: String },

    /// Unknown artifact name
    #[error("unknown artifact '{name}'")]
    UnknownArtifact { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Another split holds the lock
    #[error("another split is running (lock held on {path})")]
    Locked { path: PathBuf },

    /// File system error with the path it happened on
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Attach the file a flags block was read from.
    pub fn from_flags(err: FlagsParseError, file: &std::path::Path) -> Self {
        let file = file.to_path_buf();
        match err {
            FlagsParseError::Malformed(message) => SplitError::MalformedFlagsBlock {
                file,
                message: message.to_string(),
            },
            other => SplitError::InvalidFlags {
                file,
                message: other.to_string(),
            },
        }
    }

    /// File the error refers to, when there is one
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            SplitError::MissingBuild { path }
            | SplitError::MissingEntry { path }
            | SplitError::Locked { path } => Some(path),
            SplitError::MissingTitle { file }
            | SplitError::MissingHead { file }
            | SplitError::MalformedFlagsBlock { file, .. }
            | SplitError::InvalidFlags { file, .. }
            | SplitError::InvalidConfig { file, .. } => Some(file),
            SplitError::TargetOverlapsSource { target, .. } => Some(target),
            SplitError::Fs(err) => match err {
                FsError::NotFound(path) | FsError::PermissionDenied(path) => Some(path),
                FsError::Io { path, .. } => Some(path),
                FsError::Other(_) => None,
            },
            SplitError::DuplicateTarget { .. }
            | SplitError::InvalidArtifact { .. }
            | SplitError::UnknownArtifact { .. }
            | SplitError::Io(_) => None,
        }
    }

    /// Remediation hint shown under the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SplitError::MissingBuild { .. } => Some("Run the build first, then re-run distsplit."),
            SplitError::MissingEntry { .. } => {
                Some("Check `source.entry` in distsplit.toml or DISTSPLIT_ENTRY.")
            }
            SplitError::MissingTitle { .. } => {
                Some("Add a <title></title> element to the entry HTML.")
            }
            SplitError::MissingHead { .. } => Some("Add a literal <head> tag to the entry HTML."),
            SplitError::MalformedFlagsBlock { .. } => Some(
                "Remove the stray APP_FLAGS marker comments from the entry HTML and rebuild.",
            ),
            SplitError::Locked { .. } => {
                Some("Wait for the other run to finish; the lock is released on exit.")
            }
            SplitError::TargetOverlapsSource { .. } | SplitError::DuplicateTarget { .. } => {
                Some("Give every artifact its own directory outside the build output.")
            }
            _ => None,
        }
    }
}
