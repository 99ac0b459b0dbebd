//! Domain Services
//!
//! Pure logic with no I/O dependencies.

pub mod html_patch;
mod planner;

pub use planner::{patch_entry, PlannedArtifact, SplitPlan, SplitPlanner};
