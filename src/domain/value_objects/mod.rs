//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact_kind;
mod exclude_patterns;
mod hash;

pub use artifact_kind::ArtifactKind;
pub use exclude_patterns::{relative_to, ExcludeError, ExcludePatterns};
pub use hash::ContentHash;
