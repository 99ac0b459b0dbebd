//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a path exists relative to the working directory.
#[macro_export]
macro_rules! assert_exists {
    ($env:expr, $path:expr) => {
        assert!(
            $env.path($path).exists(),
            "Expected '{}' to exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root.path()).join("\n  ")
        );
    };
}

/// Assert that a path does NOT exist relative to the working directory.
#[macro_export]
macro_rules! assert_not_exists {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.path($path).exists(),
            "Expected '{}' to NOT exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.root.path()).join("\n  ")
        );
    };
}

/// Assert that command output contains a string.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $text:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($text),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $text,
            $result.stdout,
            $result.stderr
        );
    };
}
