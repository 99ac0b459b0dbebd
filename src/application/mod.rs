//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SplitUseCase` - Plan and produce the artifacts
//! - `CheckUseCase` - Verify artifacts on disk

pub mod check;
pub mod split;

pub use check::{ArtifactCheck, CheckFinding, CheckReport, CheckUseCase};
pub use split::{ArtifactOutcome, SplitOutcome, SplitUseCase};
