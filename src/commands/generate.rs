//! The generate command: read the code table source and write the declaration file.
//!
//! invariants:
//!     - The output file is only written after the whole pipeline succeeded
//!     - --dry-run never touches the filesystem beyond reading inputs

use crate::cli::GenerateArgs;
use crate::codegen::{generate, Generated};
use crate::config::{Config, ResolvedPaths};
use crate::formatter::StyleConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn run_generate(args: &GenerateArgs, root: &Path) -> Result<()> {
    let config = args.paths.apply(Config::load(root));
    let paths = config.resolve(root);

    let generated = generate_from_files(&paths)?;

    if args.dry_run {
        print!("{}", generated.source);
        return Ok(());
    }

    if let Some(parent) = paths.output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&paths.output, &generated.source)
        .with_context(|| format!("Failed to write {}", paths.output.display()))?;

    println!(
        "Generated {}: {} sections, {} codes",
        paths.output.display(),
        generated.sections,
        generated.codes
    );

    Ok(())
}

/// Read the source document and style config, then run the pipeline.
pub(crate) fn generate_from_files(paths: &ResolvedPaths) -> Result<Generated> {
    tracing::debug!(
        input = %paths.input.display(),
        style = %paths.style.display(),
        "generating declarations"
    );

    let document = fs::read_to_string(&paths.input)
        .with_context(|| format!("Failed to read {}", paths.input.display()))?;
    let style = StyleConfig::load(&paths.style)?;

    generate(&document, &style)
        .with_context(|| format!("Failed to generate declarations from {}", paths.input.display()))
}
