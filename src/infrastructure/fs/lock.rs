//! Run lock
//!
//! Advisory exclusive lock held while artifacts are deleted and recreated,
//! so two splits in the same working directory cannot interleave.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{SplitError, SplitResult};

/// Lock file name, created in the working directory
pub const LOCK_FILE_NAME: &str = ".distsplit.lock";

/// Held for the lifetime of the value; released on drop.
#[derive(Debug)]
pub struct SplitLock {
    file: File,
    path: PathBuf,
}

impl SplitLock {
    /// Take the lock without waiting.
    pub fn acquire(root: &Path) -> SplitResult<Self> {
        fs::create_dir_all(root)?;
        let path = root.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        if let Err(e) = file.try_lock_exclusive() {
            let contended = fs2::lock_contended_error();
            if e.kind() == contended.kind() || e.raw_os_error() == contended.raw_os_error() {
                return Err(SplitError::Locked { path });
            }
            return Err(e.into());
        }

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SplitLock {
    fn drop(&mut self) {
        // lock file is left in place for the next run
        let _ = FileExt::unlock(&self.file);
    }
}
