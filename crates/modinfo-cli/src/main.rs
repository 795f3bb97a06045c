//! modinfo-sync CLI
//!
//! Rewrites the MD5 hashes of a mod manifest so they match the files on disk.

mod cli;
mod error;
mod logging;
mod sync;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;
use sync::SyncOptions;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    let options = SyncOptions {
        dry_run: cli.is_preview(),
        json: cli.json,
    };
    let report = sync::run_sync(cli.manifest.as_deref(), options)?;

    if cli.check {
        sync::ensure_up_to_date(&report)?;
    }

    Ok(())
}
