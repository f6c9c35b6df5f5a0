//! CLI entry point for keycodegen. Parses arguments, installs the log
//! subscriber and dispatches to the command handlers.
//!
//! invariants:
//!     - The process exits with 0 on success, 1 on any error
//!     - Logs go to stderr so `generate --dry-run` output stays clean

use anyhow::Context;
use clap::Parser;
use keycodegen::cli::{Cli, Commands};
use keycodegen::commands::{run_check, run_generate};
use std::env;
use tracing::Level;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Determine root directory
    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    match cli.command {
        Commands::Generate(args) => run_generate(&args, &root),
        Commands::Check(args) => run_check(&args, &root),
    }
}
