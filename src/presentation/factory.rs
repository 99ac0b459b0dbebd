//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{CheckUseCase, SplitUseCase};
use crate::config::Config;
use crate::domain::services::SplitPlanner;
use crate::error::SplitResult;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete SplitUseCase
pub type ConcreteSplitUseCase = SplitUseCase<LocalFs>;

/// Type alias for the concrete CheckUseCase
pub type ConcreteCheckUseCase = CheckUseCase<LocalFs>;

fn planner(root: &Path, config: &Config) -> SplitPlanner {
    SplitPlanner::new(root, &config.source.dir, &config.source.entry)
}

/// Create a split use case for the working directory `root`
///
/// Fails on invalid artifact definitions or exclude patterns.
pub fn create_split_use_case(root: &Path, config: &Config) -> SplitResult<ConcreteSplitUseCase> {
    Ok(SplitUseCase::new(
        LocalFs::new(),
        planner(root, config),
        config.artifact_set()?,
        config.exclude_patterns(root)?,
    ))
}

/// Create a check use case for the working directory `root`
pub fn create_check_use_case(root: &Path, config: &Config) -> SplitResult<ConcreteCheckUseCase> {
    Ok(CheckUseCase::new(
        LocalFs::new(),
        planner(root, config),
        config.artifact_set()?,
    ))
}
