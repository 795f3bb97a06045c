//! Sync command implementation
//!
//! Resolves the manifest, runs the synchronizer and prints the change log.

use std::path::Path;

use modinfo_core::{ManifestSync, SyncReport, default_manifest};

use crate::error::{CliError, Result};

/// How the sync command should behave
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Compute the report without writing the manifest
    pub dry_run: bool,
    /// Print the report as JSON instead of text lines
    pub json: bool,
}

/// Run the sync command and print its report.
pub fn run_sync(manifest: Option<&Path>, options: SyncOptions) -> Result<SyncReport> {
    let sync = match manifest {
        Some(path) => ManifestSync::new(path),
        None => ManifestSync::new(default_manifest()?),
    }
    .dry_run(options.dry_run);

    tracing::debug!(manifest = %sync.manifest(), dry_run = options.dry_run, "synchronizing");
    let report = sync.run()?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in render(&report) {
            println!("{line}");
        }
    }

    Ok(report)
}

/// Fail when a check run found stale hashes.
pub fn ensure_up_to_date(report: &SyncReport) -> Result<()> {
    if report.is_up_to_date() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} hash(es) out of date in {}",
            report.updated_count(),
            report.manifest
        )))
    }
}

/// Text output: one line per missing or updated entry, then the summary.
pub fn render(report: &SyncReport) -> Vec<String> {
    let mut lines = report.log_lines();
    lines.push(report.summary());
    lines
}
