//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Keep the MD5 hashes in a .modinfo manifest in sync with the files it lists
#[derive(Parser, Debug)]
#[command(name = "modinfo-sync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest to update. Defaults to the single .modinfo file next to this
    /// executable, or else in the current directory.
    #[arg(env = "MODINFO_SYNC_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Preview changes without writing the manifest
    #[arg(long)]
    pub dry_run: bool,

    /// Fail if any hash is out of date, without writing the manifest
    #[arg(long)]
    pub check: bool,

    /// Output the report as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the manifest must be left untouched.
    pub fn is_preview(&self) -> bool {
        self.dry_run || self.check
    }
}
