//! Command handlers
//!
//! Each handler wires config into a use case, runs it, and renders the
//! result for the terminal or as NDJSON.

pub mod check;
pub mod flags;
pub mod split;

use std::path::Path;

use anyhow::Result;
use distsplit::config::Config;
use distsplit::domain::ports::{NoopEventSink, SplitEventSink};
use distsplit::infrastructure::{ConsoleEventSink, JsonEventSink};

use crate::ui::context::UiContext;

/// Resolve config file, then environment overrides.
///
/// Unknown config keys are reported on stderr and otherwise ignored.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    let (config, warnings) = Config::discover(root, explicit)?;
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(config.with_env_overrides())
}

/// Event sink for the current output mode
pub fn event_sink(ui: &UiContext) -> Box<dyn SplitEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else if ui.verbose > 0 {
        Box::new(ConsoleEventSink::stderr(ui.verbose))
    } else {
        Box::new(NoopEventSink)
    }
}
