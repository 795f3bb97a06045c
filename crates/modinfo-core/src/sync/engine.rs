//! ManifestSync implementation
//!
//! Reconciles each file entry's recorded hash with the MD5 of the file it
//! references, then writes the manifest back once if anything changed.

use std::path::Path;

use modinfo_fs::{NormalizedPath, checksum, io};

use crate::Result;
use crate::entry::{FileEntry, parse_entries, splice_hashes};

use super::report::{EntryOutcome, EntryRecord, SyncReport};

/// Synchronizes the recorded hashes of one manifest.
///
/// All referenced files are hashed before anything is written, so an error
/// on any of them leaves the manifest untouched.
#[derive(Debug, Clone)]
pub struct ManifestSync {
    manifest: NormalizedPath,
    dry_run: bool,
}

impl ManifestSync {
    pub fn new(manifest: impl AsRef<Path>) -> Self {
        Self {
            manifest: NormalizedPath::new(manifest),
            dry_run: false,
        }
    }

    /// Compute the report without writing the manifest.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn manifest(&self) -> &NormalizedPath {
        &self.manifest
    }

    /// Run the synchronization.
    ///
    /// # Errors
    ///
    /// Fails if the manifest cannot be read as UTF-8 text, if an existing
    /// referenced file cannot be read, or if the rewrite fails. A referenced
    /// file that does not exist is reported, not an error.
    pub fn run(&self) -> Result<SyncReport> {
        let text = io::read_text(&self.manifest)?;
        let base = self.manifest.containing_dir();
        let entries = parse_entries(&text);
        tracing::debug!(manifest = %self.manifest, entries = entries.len(), "scanned manifest");

        let records = entries
            .iter()
            .map(|entry| reconcile(&base, entry))
            .collect::<Result<Vec<_>>>()?;

        let replacements: Vec<_> = entries
            .iter()
            .zip(&records)
            .filter_map(|(entry, record)| match &record.outcome {
                EntryOutcome::Updated { new, .. } => Some((entry.hash_span.clone(), new.as_str())),
                _ => None,
            })
            .collect();

        let written = if replacements.is_empty() {
            tracing::debug!("no stale hashes, manifest left untouched");
            false
        } else if self.dry_run {
            tracing::debug!(stale = replacements.len(), "dry run, manifest left untouched");
            false
        } else {
            let updated = splice_hashes(&text, replacements);
            io::write_text(&self.manifest, &updated)?;
            true
        };

        Ok(SyncReport {
            manifest: self.manifest.to_string(),
            entries: records,
            dry_run: self.dry_run,
            written,
        })
    }
}

/// Synchronize the manifest at `manifest`, writing it back if any hash changed.
pub fn synchronize(manifest: impl AsRef<Path>) -> Result<SyncReport> {
    ManifestSync::new(manifest).run()
}

fn reconcile(base: &NormalizedPath, entry: &FileEntry<'_>) -> Result<EntryRecord> {
    let target = base.resolve(entry.relative_path);

    let outcome = if !target.exists() {
        tracing::warn!(path = entry.relative_path, "referenced file is missing");
        EntryOutcome::Missing
    } else {
        let actual = checksum::compute_file_md5(&target)?;
        if entry.records(&actual) {
            EntryOutcome::UpToDate
        } else {
            tracing::debug!(path = entry.relative_path, hash = %actual, "stale hash");
            EntryOutcome::Updated {
                old: entry.recorded_hash.to_ascii_uppercase(),
                new: actual,
            }
        }
    };

    Ok(EntryRecord {
        path: entry.relative_path.to_string(),
        import: entry.import,
        outcome,
    })
}
