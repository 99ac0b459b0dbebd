//! Test environment builder for isolated distsplit runs.
//!
//! Provides `TestEnv` - a temp working directory seeded with a build output,
//! plus helpers to run the distsplit binary against it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{BASE_INDEX, BUNDLE_JS, BUNDLE_JS_MAP};

/// Result of running a distsplit CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON: {l:?} ({e})\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated working directory with a build output under `dist/`.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Default build output: entry HTML plus a bundle and its source map
    pub fn with_default_build() -> Self {
        Self::builder().build()
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Run distsplit with the working directory as cwd
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run distsplit with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_remove("DISTSPLIT_SOURCE_DIR")
            .env_remove("DISTSPLIT_ENTRY")
            .env_remove("DISTSPLIT_COLOR")
            .env_remove("GITHUB_ACTIONS")
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute distsplit");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Read a file relative to the working directory
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Write a file relative to the working directory
    pub fn write(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
    }

    /// Every file under `relative`, keyed by portable relative path
    pub fn tree(&self, relative: &str) -> BTreeMap<String, Vec<u8>> {
        let base = self.path(relative);
        let mut out = BTreeMap::new();
        collect(&base, &base, &mut out);
        out
    }
}

fn collect(base: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(base, &path, out);
        } else {
            let rel = path
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            out.insert(rel, std::fs::read(&path).unwrap());
        }
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    default_build: bool,
    config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            default_build: true,
            config: None,
        }
    }

    /// Replace the entry HTML of the default build
    pub fn with_entry(self, html: &str) -> Self {
        self.with_file("dist/index.html", html)
    }

    /// Add or replace any file, relative to the working directory
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Write `distsplit.toml`
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    /// Start with an empty working directory (no `dist/`)
    pub fn without_build(mut self) -> Self {
        self.default_build = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        let env = TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_distsplit")),
        };

        if self.default_build {
            env.write("dist/index.html", BASE_INDEX);
            env.write("dist/assets/index-4f2a.js", BUNDLE_JS);
            env.write("dist/assets/index-4f2a.js.map", BUNDLE_JS_MAP);
            env.write("dist/favicon.svg", "<svg/>");
        }
        for (relative, content) in &self.files {
            env.write(relative, content);
        }
        if let Some(config) = &self.config {
            env.write("distsplit.toml", config);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
