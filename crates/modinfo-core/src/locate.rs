//! Manifest discovery
//!
//! A mod keeps exactly one `.modinfo` file at its root. When no path is given
//! the tool looks next to its own executable first, so a copy dropped into a
//! mod folder works from anywhere, then in the current directory.

use std::fs;
use std::path::{Path, PathBuf};

use modinfo_fs::NormalizedPath;

use crate::{Error, Result};

/// File extension identifying a mod manifest
pub const MANIFEST_EXTENSION: &str = "modinfo";

/// Find the single manifest directly inside `dir`.
///
/// # Errors
///
/// - [`Error::ManifestNotFound`] if `dir` holds no manifest
/// - [`Error::AmbiguousManifest`] if it holds more than one
/// - [`Error::Fs`] if `dir` cannot be listed
pub fn find_manifest(dir: &Path) -> Result<NormalizedPath> {
    let listing = fs::read_dir(dir).map_err(|e| modinfo_fs::Error::io(dir, e))?;

    let mut candidates: Vec<NormalizedPath> = listing
        .filter_map(|entry| entry.ok())
        .map(|entry| NormalizedPath::new(entry.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(MANIFEST_EXTENSION))
                && path.is_file()
        })
        .collect();
    candidates.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    match candidates.len() {
        0 => Err(Error::ManifestNotFound {
            dirs: vec![dir.to_path_buf()],
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(Error::AmbiguousManifest {
            dir: dir.to_path_buf(),
            candidates: candidates
                .iter()
                .filter_map(|p| p.file_name().map(str::to_string))
                .collect(),
        }),
    }
}

/// Locate the manifest to use when none was given.
///
/// Searches the executable's directory, then the current directory.
pub fn default_manifest() -> Result<NormalizedPath> {
    let mut searched = Vec::new();
    for dir in search_dirs() {
        match find_manifest(&dir) {
            Ok(path) => {
                tracing::debug!(manifest = %path, "found manifest");
                return Ok(path);
            }
            Err(Error::ManifestNotFound { .. }) => searched.push(dir),
            Err(e) => return Err(e),
        }
    }
    Err(Error::ManifestNotFound { dirs: searched })
}

fn search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    match std::env::current_exe().and_then(dunce::canonicalize) {
        Ok(exe) => dirs.extend(exe.parent().map(Path::to_path_buf)),
        Err(e) => tracing::debug!(error = %e, "cannot resolve executable location"),
    }
    match std::env::current_dir() {
        Ok(cwd) => {
            if !dirs.contains(&cwd) {
                dirs.push(cwd);
            }
        }
        Err(e) => tracing::debug!(error = %e, "cannot resolve current directory"),
    }

    dirs
}
