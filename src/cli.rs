use std::path::PathBuf;

use clap::{Parser, Subcommand};
use distsplit::config::ColorMode;

/// distsplit - split a built single-page app into per-audience artifacts
#[derive(Parser, Debug)]
#[command(name = "distsplit")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'distsplit' without arguments to split ./dist with the defaults.")]
pub struct Cli {
    /// Working directory holding the build output and the artifacts
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/distsplit.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Produce every artifact from the build output (default)
    Split {
        /// Show what would be written without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify the artifacts on disk against their definitions
    Check,

    /// Print an artifact's runtime flags as JSON
    Flags {
        /// Artifact name (console, landing, or a configured name)
        artifact: String,

        /// Read the flags back from the produced artifact instead
        #[arg(long)]
        installed: bool,
    },
}
