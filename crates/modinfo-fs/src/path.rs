//! Manifest-relative path handling

use std::path::{Path, PathBuf};

/// A path stored with forward slashes.
///
/// Manifests written on Windows reference their files with backslashes
/// (`SQL\Units.sql`). Normalizing on construction lets the same manifest
/// resolve on any platform; the native form is produced only for I/O.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform-native form for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether this path is rooted: `/x`, `//server/share` or `C:/x`.
    pub fn is_absolute(&self) -> bool {
        let bytes = self.inner.as_bytes();
        self.inner.starts_with('/')
            || (bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && &bytes[1..3] == b":/")
    }

    /// Resolve a manifest reference against this directory.
    ///
    /// An absolute reference is taken as written.
    pub fn resolve(&self, reference: &str) -> Self {
        let reference = Self::new(reference);
        if reference.is_absolute() || self.inner.is_empty() || self.inner == "." {
            return reference;
        }
        let base = self.inner.trim_end_matches('/');
        Self {
            inner: format!("{}/{}", base, reference.inner),
        }
    }

    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            None => None,
        }
    }

    /// Directory that references inside this file resolve against.
    ///
    /// A bare file name resolves against the current directory.
    pub fn containing_dir(&self) -> Self {
        self.parent().unwrap_or_else(|| Self {
            inner: ".".to_string(),
        })
    }

    pub fn file_name(&self) -> Option<&str> {
        self.inner.trim_end_matches('/').rsplit('/').next()
    }

    /// Extension of the file name; dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
