//! `distsplit split`

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use distsplit::config::Config;
use distsplit::infrastructure::SplitLock;
use distsplit::presentation::{create_split_use_case, TextRenderer};

use super::event_sink;
use crate::ui::context::UiContext;

pub fn cmd_split(root: &Path, config: &Config, dry_run: bool, ui: &UiContext) -> Result<ExitCode> {
    let use_case = create_split_use_case(root, config)?;
    let sink = event_sink(ui);
    let renderer = TextRenderer::new(ui.color, ui.unicode);

    // every input check happens here, before the lock and before any delete
    let plan = use_case.plan()?;

    if dry_run {
        use_case.preview(&plan, sink.as_ref());
        if !ui.json {
            print!("{}", renderer.render_plan(&plan, root));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let _lock = SplitLock::acquire(root)?;
    let outcome = use_case.execute(&plan, sink.as_ref())?;

    if !ui.json {
        print!("{}", renderer.render_split(&outcome, root));
    }
    Ok(ExitCode::SUCCESS)
}
