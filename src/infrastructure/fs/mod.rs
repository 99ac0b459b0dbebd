//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the run lock.

mod local;
mod lock;

pub use local::LocalFs;
pub use lock::{SplitLock, LOCK_FILE_NAME};
