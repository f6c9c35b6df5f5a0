//! Command-line interface for keycodegen, defined with the clap derive macros.
//!
//! invariants:
//!     - Global flags (root, verbose) live on Cli and propagate to every subcommand
//!     - Path flags override keycodegen.toml entries one by one

use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keycodegen")]
#[command(author, version, about = "TypeScript key-code union generator")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the declaration file from the code table source
    Generate(GenerateArgs),

    /// Check that the declaration file is up to date
    Check(CheckArgs),
}

/// File locations shared between generate and check
#[derive(Args, Clone, Default)]
pub struct PathOptions {
    /// Code table source document
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Generated declaration file
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prettier style config (JSON)
    #[arg(long, value_name = "PATH")]
    pub style: Option<PathBuf>,
}

impl PathOptions {
    /// Overlay the flags that were given on top of the file config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(ref input) = self.input {
            config.input = input.clone();
        }
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        if let Some(ref style) = self.style {
            config.style = style.clone();
        }
        config
    }
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Print the generated declarations instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub paths: PathOptions,
}

#[derive(Args, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub paths: PathOptions,
}
