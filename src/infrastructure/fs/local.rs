//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{CopyStats, FileSystem, FsError, FsResult};
use crate::domain::value_objects::{relative_to, ContentHash, ExcludePatterns};

/// Local file system implementation
///
/// Provides atomic writes, recursive copies, and tree digests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Walk every entry under `root` in a stable order, no ignore files honored.
fn walk(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}

fn walk_error(root: &Path, err: ignore::Error) -> FsError {
    match err.into_io_error() {
        Some(io) => FsError::at(root, io),
        None => FsError::Other(format!("failed to walk {}", root.display())),
    }
}

/// Forward-slash relative path, identical on every platform
fn portable(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn copy_link(src: &Path, dest: &Path) -> std::io::Result<()> {
    let target = fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(not(unix))]
fn copy_link(src: &Path, dest: &Path) -> std::io::Result<()> {
    fs::copy(src, dest).map(|_| ())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        // tempfile + rename; keep the mode of the file being replaced
        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| FsError::at(path, e))?;
        if let Ok(meta) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| FsError::at(path, e))?;
        }
        tmp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
        tmp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<bool> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(FsError::at(path, e)),
        };

        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        match result {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FsError::at(path, e)),
        }
    }

    fn copy_tree(
        &self,
        from: &Path,
        to: &Path,
        exclude: &ExcludePatterns,
        on_file: &mut dyn FnMut(&Path),
    ) -> FsResult<CopyStats> {
        if !from.is_dir() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        fs::create_dir_all(to).map_err(|e| FsError::at(to, e))?;

        let mut stats = CopyStats::default();
        for entry in walk(from) {
            let entry = entry.map_err(|e| walk_error(from, e))?;
            let rel = relative_to(from, entry.path());
            if rel.as_os_str().is_empty() {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };

            // children of an excluded directory match through their parents
            if exclude.is_excluded(&rel, file_type.is_dir()) {
                if !file_type.is_dir() {
                    stats.excluded += 1;
                }
                continue;
            }

            let dest = to.join(&rel);
            if file_type.is_dir() {
                fs::create_dir_all(&dest).map_err(|e| FsError::at(&dest, e))?;
                stats.dirs += 1;
            } else if file_type.is_symlink() {
                copy_link(entry.path(), &dest).map_err(|e| FsError::at(&dest, e))?;
                stats.links += 1;
            } else {
                fs::copy(entry.path(), &dest).map_err(|e| FsError::at(&dest, e))?;
                on_file(&rel);
                stats.files += 1;
            }
        }

        Ok(stats)
    }

    fn hash_tree(&self, path: &Path) -> FsResult<ContentHash> {
        let mut entries: Vec<(String, Vec<u8>)> = Vec::new();
        for entry in walk(path) {
            let entry = entry.map_err(|e| walk_error(path, e))?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            let rel = portable(&relative_to(path, entry.path()));

            if file_type.is_symlink() {
                let target: PathBuf =
                    fs::read_link(entry.path()).map_err(|e| FsError::at(entry.path(), e))?;
                entries.push((rel, target.to_string_lossy().into_owned().into_bytes()));
            } else if file_type.is_file() {
                let bytes = fs::read(entry.path()).map_err(|e| FsError::at(entry.path(), e))?;
                entries.push((rel, bytes));
            }
        }
        Ok(ContentHash::from_tree(&entries))
    }
}
