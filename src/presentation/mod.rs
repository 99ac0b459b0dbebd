//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Result rendering for split, dry run, and check
//! - `diff` - Unified diff for drifted entry files
//! - `theme` - Colors and icons

pub mod diff;
pub mod factory;
pub mod output;
pub mod theme;

pub use factory::{create_check_use_case, create_split_use_case};
pub use output::{check_report_json, TextRenderer};
