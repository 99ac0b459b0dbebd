//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the application layer to perform file operations
//! without depending on concrete implementations (local disk, in-memory mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::{ContentHash, ExcludePatterns};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Attach the path an I/O error happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// What a tree copy did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
    pub links: usize,
    pub excluded: usize,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory tree; `Ok(false)` when there was nothing to remove
    fn remove_dir_all(&self, path: &Path) -> FsResult<bool>;

    /// Recursively copy `from` into `to`, skipping excluded paths.
    ///
    /// `on_file` receives each copied path relative to `from`.
    fn copy_tree(
        &self,
        from: &Path,
        to: &Path,
        exclude: &ExcludePatterns,
        on_file: &mut dyn FnMut(&Path),
    ) -> FsResult<CopyStats>;

    /// Digest over every file under `path` (relative paths and contents)
    fn hash_tree(&self, path: &Path) -> FsResult<ContentHash>;
}

/// In-memory file system for tests
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct State {
        files: BTreeMap<PathBuf, String>,
        dirs: BTreeSet<PathBuf>,
    }

    /// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
    #[derive(Clone, Default)]
    pub struct MockFileSystem {
        state: Arc<Mutex<State>>,
        /// Paths whose write fails, to exercise error propagation
        fail_writes: Arc<Mutex<BTreeSet<PathBuf>>>,
    }

    impl MockFileSystem {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_file(&self, path: impl Into<PathBuf>, content: &str) {
            let path = path.into();
            let mut state = self.state.lock().unwrap();
            let mut parent = path.parent();
            while let Some(dir) = parent {
                if dir.as_os_str().is_empty() {
                    break;
                }
                state.dirs.insert(dir.to_path_buf());
                parent = dir.parent();
            }
            state.files.insert(path, content.to_string());
        }

        pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
            self.state.lock().unwrap().files.get(path.as_ref()).cloned()
        }

        pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
            let dir = dir.as_ref();
            self.state
                .lock()
                .unwrap()
                .files
                .keys()
                .filter(|p| p.starts_with(dir))
                .cloned()
                .collect()
        }

        pub fn fail_write(&self, path: impl Into<PathBuf>) {
            self.fail_writes.lock().unwrap().insert(path.into());
        }
    }

    impl FileSystem for MockFileSystem {
        fn read(&self, path: &Path) -> FsResult<String> {
            self.file(path)
                .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
        }

        fn write(&self, path: &Path, content: &str) -> FsResult<()> {
            if self.fail_writes.lock().unwrap().contains(path) {
                return Err(FsError::PermissionDenied(path.to_path_buf()));
            }
            self.add_file(path, content);
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            let state = self.state.lock().unwrap();
            state.files.contains_key(path) || state.dirs.contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.state.lock().unwrap().dirs.contains(path)
        }

        fn remove_dir_all(&self, path: &Path) -> FsResult<bool> {
            let mut state = self.state.lock().unwrap();
            let existed = state.dirs.contains(path);
            state.files.retain(|p, _| !p.starts_with(path));
            state.dirs.retain(|p| !p.starts_with(path));
            Ok(existed)
        }

        fn copy_tree(
            &self,
            from: &Path,
            to: &Path,
            exclude: &ExcludePatterns,
            on_file: &mut dyn FnMut(&Path),
        ) -> FsResult<CopyStats> {
            if !self.is_dir(from) {
                return Err(FsError::NotFound(from.to_path_buf()));
            }

            let sources: Vec<(PathBuf, String)> = {
                let state = self.state.lock().unwrap();
                state
                    .files
                    .iter()
                    .filter(|(p, _)| p.starts_with(from))
                    .map(|(p, c)| (p.clone(), c.clone()))
                    .collect()
            };

            let mut stats = CopyStats::default();
            self.state.lock().unwrap().dirs.insert(to.to_path_buf());
            for (path, content) in sources {
                let rel = path.strip_prefix(from).unwrap_or(&path).to_path_buf();
                if exclude.is_excluded(&rel, false) {
                    stats.excluded += 1;
                    continue;
                }
                self.add_file(to.join(&rel), &content);
                on_file(&rel);
                stats.files += 1;
            }
            Ok(stats)
        }

        fn hash_tree(&self, path: &Path) -> FsResult<ContentHash> {
            let state = self.state.lock().unwrap();
            let entries: Vec<(String, String)> = state
                .files
                .iter()
                .filter(|(p, _)| p.starts_with(path))
                .map(|(p, c)| {
                    let rel = p.strip_prefix(path).unwrap_or(p);
                    (rel.to_string_lossy().replace('\\', "/"), c.clone())
                })
                .collect();
            Ok(ContentHash::from_tree(&entries))
        }
    }
}
