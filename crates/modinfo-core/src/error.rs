//! Error types for modinfo-core

use std::path::PathBuf;

/// Result type for modinfo-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in modinfo-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No manifest in any searched directory
    #[error("No .modinfo manifest found in {}", join_dirs(.dirs))]
    ManifestNotFound { dirs: Vec<PathBuf> },

    /// More than one manifest, so the choice must be made explicitly
    #[error("Multiple .modinfo manifests in {dir}: {}; pass one explicitly", .candidates.join(", "))]
    AmbiguousManifest { dir: PathBuf, candidates: Vec<String> },

    /// Filesystem error from modinfo-fs
    #[error(transparent)]
    Fs(#[from] modinfo_fs::Error),
}

fn join_dirs(dirs: &[PathBuf]) -> String {
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
