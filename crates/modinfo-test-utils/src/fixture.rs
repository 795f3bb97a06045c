//! [`TestMod`] builder for mod directory test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A recorded hash that never matches real content.
pub const ZERO_HASH: &str = "00000000000000000000000000000000";

/// A temporary mod directory holding a manifest and the files it references.
///
/// # Example
///
/// ```rust,no_run
/// use modinfo_test_utils::{TestMod, ZERO_HASH};
///
/// let mut test_mod = TestMod::new();
/// test_mod.file("SQL/Units.sql", "INSERT INTO Units;");
/// test_mod.entry(ZERO_HASH, true, "SQL/Units.sql");
/// let manifest = test_mod.write_manifest();
/// ```
pub struct TestMod {
    temp_dir: TempDir,
    manifest_name: String,
    entries: Vec<String>,
}

impl Default for TestMod {
    fn default() -> Self {
        Self::new()
    }
}

impl TestMod {
    /// Create an empty temporary mod directory with a `Test.modinfo` manifest.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            manifest_name: "Test.modinfo".to_string(),
            entries: Vec::new(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join(&self.manifest_name)
    }

    /// Write a referenced file at `rel_path`, creating parent directories.
    pub fn file(&mut self, rel_path: &str, content: impl AsRef<[u8]>) -> &mut Self {
        let full_path = self.root().join(rel_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
        self
    }

    /// Queue a `<File>` entry for the manifest.
    pub fn entry(&mut self, md5: &str, import: bool, rel_path: &str) -> &mut Self {
        self.entries.push(file_entry(md5, import, rel_path));
        self
    }

    /// Render the queued entries as a complete manifest document.
    pub fn render_manifest(&self) -> String {
        let mut doc = String::from(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <Mod id=\"4d2d3c5e-0000-4000-8000-000000000000\" version=\"1\">\n  \
             <Properties>\n    <Name>Test Mod</Name>\n  </Properties>\n  <Files>\n",
        );
        for entry in &self.entries {
            doc.push_str("    ");
            doc.push_str(entry);
            doc.push('\n');
        }
        doc.push_str("  </Files>\n</Mod>\n");
        doc
    }

    /// Write the rendered manifest to disk and return its path.
    pub fn write_manifest(&self) -> PathBuf {
        let path = self.manifest_path();
        fs::write(&path, self.render_manifest()).unwrap();
        path
    }

    /// Write arbitrary manifest text to disk and return its path.
    pub fn write_manifest_text(&self, text: &str) -> PathBuf {
        let path = self.manifest_path();
        fs::write(&path, text).unwrap();
        path
    }

    /// Read the manifest back from disk.
    ///
    /// # Panics
    /// Panics if the manifest has not been written.
    pub fn read_manifest(&self) -> String {
        let path = self.manifest_path();
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read manifest: {}", path.display()))
    }

    /// Modification time of the manifest on disk.
    pub fn manifest_mtime(&self) -> std::time::SystemTime {
        fs::metadata(self.manifest_path())
            .and_then(|m| m.modified())
            .unwrap()
    }
}

/// Render a single `<File>` entry.
pub fn file_entry(md5: &str, import: bool, rel_path: &str) -> String {
    format!(
        "<File md5=\"{}\" import=\"{}\">{}</File>",
        md5,
        if import { 1 } else { 0 },
        rel_path
    )
}
