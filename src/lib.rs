//! distsplit - split one built single-page app into per-audience artifacts
//!
//! A frontend build produces one output directory. distsplit copies it into
//! several deployable directories, rewriting each copy's entry HTML with its
//! own `<title>` and a flags block that tells the client which app it is and
//! which routes it must refuse to render.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckReport, CheckUseCase, SplitOutcome, SplitUseCase};
pub use config::Config;
pub use domain::entities::{AppFlags, ArtifactSet, ArtifactSpec};
pub use domain::value_objects::ArtifactKind;
pub use error::{SplitError, SplitResult};
