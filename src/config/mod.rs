//! Configuration module for distsplit
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DISTSPLIT_*, NO_COLOR)
//! 3. Project config (distsplit.toml, or `--config <path>`)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{with_env_overrides_from, ConfigWarning};
pub use types::{ColorMode, Config, OutputConfig, SourceConfig, CONFIG_FILE_NAME};
