//! `distsplit flags <artifact>`
//!
//! Prints the typed flags object a client router takes at startup.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use distsplit::config::Config;
use distsplit::domain::entities::AppFlags;
use distsplit::domain::ports::FileSystem;
use distsplit::infrastructure::LocalFs;
use distsplit::SplitError;

pub fn cmd_flags(root: &Path, config: &Config, artifact: &str, installed: bool) -> Result<ExitCode> {
    let artifacts = config.artifact_set()?;
    let spec = artifacts.get(artifact)?;

    let flags = if installed {
        let entry = root.join(&spec.dir).join(&config.source.entry);
        let html = LocalFs::new().read(&entry).map_err(SplitError::from)?;
        AppFlags::parse_block(&html).map_err(|e| SplitError::from_flags(e, &entry))?
    } else {
        spec.flags()
    };

    println!("{}", serde_json::to_string(&flags)?);
    Ok(ExitCode::SUCCESS)
}
