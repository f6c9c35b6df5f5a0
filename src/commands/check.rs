//! The check command: regenerate in memory and compare with the file on disk.
//!
//! Never writes. Fails when the declaration file is missing or differs from
//! what generate would write, so CI can catch a stale checked-in file.

use super::generate::generate_from_files;
use crate::cli::CheckArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn run_check(args: &CheckArgs, root: &Path) -> Result<()> {
    let config = args.paths.apply(Config::load(root));
    let paths = config.resolve(root);

    let generated = generate_from_files(&paths)?;

    if !paths.output.exists() {
        anyhow::bail!(
            "{} does not exist; run `keycodegen generate`",
            paths.output.display()
        );
    }

    let current = fs::read_to_string(&paths.output)
        .with_context(|| format!("Failed to read {}", paths.output.display()))?;

    if current != generated.source {
        anyhow::bail!(
            "{} is out of date; run `keycodegen generate`",
            paths.output.display()
        );
    }

    println!(
        "{} is up to date ({} sections, {} codes)",
        paths.output.display(),
        generated.sections,
        generated.codes
    );

    Ok(())
}
