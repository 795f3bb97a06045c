//! Report types for manifest synchronization
//!
//! One [`EntryRecord`] per file entry, in manifest order, rolled up into a
//! [`SyncReport`] that renders the change log.

use serde::{Deserialize, Serialize};

/// What happened to a single file entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// The referenced file does not exist; the entry was left alone
    Missing,
    /// The recorded hash already matches, ignoring case
    UpToDate,
    /// The recorded hash was stale and is replaced by `new`
    Updated { old: String, new: String },
}

/// The outcome for one file entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// The path as written in the manifest
    pub path: String,
    /// The entry's `import` attribute
    pub import: bool,
    pub outcome: EntryOutcome,
}

impl EntryRecord {
    /// The change-log line for this entry, if it has one.
    ///
    /// Up-to-date entries are silent.
    pub fn log_line(&self) -> Option<String> {
        match &self.outcome {
            EntryOutcome::Missing => Some(format!("  MISSING: {}", self.path)),
            EntryOutcome::Updated { old, new } => {
                Some(format!("  {}: {} -> {}", self.path, old, new))
            }
            EntryOutcome::UpToDate => None,
        }
    }
}

/// Report from a synchronization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    /// The manifest that was scanned
    pub manifest: String,
    /// Every file entry, in manifest order
    pub entries: Vec<EntryRecord>,
    /// Whether the run was a preview
    pub dry_run: bool,
    /// Whether the manifest on disk was rewritten
    pub written: bool,
}

impl SyncReport {
    /// Number of entries whose hash was (or, in a dry run, would be) updated
    pub fn updated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, EntryOutcome::Updated { .. }))
            .count()
    }

    /// Number of entries whose referenced file is missing
    pub fn missing_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome == EntryOutcome::Missing)
            .count()
    }

    /// Whether no recorded hash is stale
    pub fn is_up_to_date(&self) -> bool {
        self.updated_count() == 0
    }

    /// Per-entry change-log lines, in manifest order
    pub fn log_lines(&self) -> Vec<String> {
        self.entries.iter().filter_map(EntryRecord::log_line).collect()
    }

    /// The final summary line
    pub fn summary(&self) -> String {
        match self.updated_count() {
            0 => "All hashes up to date.".to_string(),
            n => format!("Updated {} hash(es).", n),
        }
    }
}
