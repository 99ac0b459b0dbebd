//! `distsplit check`

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use distsplit::config::Config;
use distsplit::presentation::{check_report_json, create_check_use_case, TextRenderer};

use crate::ui::context::UiContext;
use crate::ui::json;

pub fn cmd_check(root: &Path, config: &Config, ui: &UiContext) -> Result<ExitCode> {
    let report = create_check_use_case(root, config)?.execute()?;

    if ui.json {
        for line in check_report_json(&report, root) {
            json::emit(&line)?;
        }
    } else {
        let renderer = TextRenderer::new(ui.color, ui.unicode);
        print!("{}", renderer.render_check(&report, root));
    }

    Ok(if report.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
