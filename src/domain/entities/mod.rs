//! Domain Entities
//!
//! - `ArtifactSpec` / `ArtifactSet` - Which copies to produce
//! - `AppFlags` - Runtime flags embedded into each copy

mod artifact;
mod flags;

pub use artifact::{normalize_dir, ArtifactSet, ArtifactSpec};
pub use flags::{AppFlags, FlagsParseError, FLAGS_END, FLAGS_START};
