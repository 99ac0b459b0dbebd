//! Configuration loading

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{SplitError, SplitResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SplitResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SplitError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the explicit config, the working-directory config, or defaults.
///
/// An explicit path must exist; the implicit one is optional.
pub fn discover(root: &Path, explicit: Option<&Path>) -> SplitResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(SplitError::InvalidConfig {
                file: path.to_path_buf(),
                message: "config file not found".to_string(),
            });
        }
        return load_with_warnings(path);
    }

    let implicit = root.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        return load_with_warnings(&implicit);
    }

    Ok((Config::default(), Vec::new()))
}

/// Apply environment variable overrides (DISTSPLIT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Env overrides with an injectable lookup, for tests.
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    // DISTSPLIT_SOURCE_DIR
    if let Some(dir) = get_env("DISTSPLIT_SOURCE_DIR").filter(|v| !v.trim().is_empty()) {
        config.source.dir = dir;
    }

    // DISTSPLIT_ENTRY
    if let Some(entry) = get_env("DISTSPLIT_ENTRY").filter(|v| !v.trim().is_empty()) {
        config.source.entry = entry;
    }

    // DISTSPLIT_COLOR
    if let Some(color) = get_env("DISTSPLIT_COLOR") {
        let validator = EnvVarValidator::new("DISTSPLIT_COLOR", &["auto", "always", "never"]);
        config.output.color =
            validator.parse_with_writer(&color, ColorMode::parse, config.output.color, warnings);
    }

    // NO_COLOR (https://no-color.org) wins over everything but --color
    if get_env("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.output.color = ColorMode::Never;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "dir",
        "entry",
        "exclude",
        "output",
        "color",
        "unicode",
        "artifacts",
        "name",
        "kind",
        "blocked_routes",
        "title",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
