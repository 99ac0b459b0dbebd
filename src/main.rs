//! distsplit CLI - split a built single-page app into per-audience artifacts
//!
//! Usage: distsplit [COMMAND]
//!
//! Commands:
//!   split   Produce every artifact from the build output (default)
//!   check   Verify the artifacts on disk
//!   flags   Print an artifact's runtime flags as JSON

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = commands::load_config(&cli.root, cli.config.as_deref())?;
    let ui = ui::context::UiContext::new(cli.json, cli.verbose, cli.color, &config);

    match &cli.command {
        None => commands::split::cmd_split(&cli.root, &config, false, &ui),
        Some(Commands::Split { dry_run }) => {
            commands::split::cmd_split(&cli.root, &config, *dry_run, &ui)
        }
        Some(Commands::Check) => commands::check::cmd_check(&cli.root, &config, &ui),
        Some(Commands::Flags {
            artifact,
            installed,
        }) => commands::flags::cmd_flags(&cli.root, &config, artifact, *installed),
    }
}
