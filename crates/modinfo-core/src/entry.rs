//! File entry scanning for `.modinfo` manifests.
//!
//! A manifest lists the files a mod ships, each with a recorded digest:
//! ```text
//! <File md5="0123456789ABCDEF0123456789ABCDEF" import="1">SQL/Units.sql</File>
//! ```
//! Everything around the entries is opaque and never parsed.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Matches one file entry.
///
/// Groups: 1 text before the hash, 2 the hash, 3 text between hash and path
/// (with the import flag nested as 4), 5 the path, 6 the closing marker. The
/// path is non-greedy and cannot span lines.
static FILE_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(<File\s+md5=")([0-9A-Fa-f]{32})("\s+import="([01])">)(.+?)(</File>)"#)
        .expect("Invalid file entry regex")
});

/// A file entry located in manifest text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry<'a> {
    /// The digest currently recorded, as written in the manifest.
    pub recorded_hash: &'a str,
    /// The `import` attribute. Carried for reporting only.
    pub import: bool,
    /// The referenced path, relative to the manifest's directory.
    pub relative_path: &'a str,
    /// Byte range of the whole entry within the manifest.
    pub span: Range<usize>,
    /// Byte range of the recorded hash within the manifest.
    pub hash_span: Range<usize>,
}

impl FileEntry<'_> {
    /// Whether `hash` is the recorded digest, ignoring letter case.
    pub fn records(&self, hash: &str) -> bool {
        self.recorded_hash.eq_ignore_ascii_case(hash)
    }
}

/// Parses all file entries from the given manifest text, in order of appearance.
///
/// # Example
/// ```
/// use modinfo_core::entry::parse_entries;
///
/// let text = r#"<Files>
///   <File md5="D41D8CD98F00B204E9800998ECF8427E" import="0">Lua/Empty.lua</File>
/// </Files>"#;
///
/// let entries = parse_entries(text);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].relative_path, "Lua/Empty.lua");
/// assert!(!entries[0].import);
/// ```
pub fn parse_entries(text: &str) -> Vec<FileEntry<'_>> {
    FILE_ENTRY_REGEX
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("whole match is always present");
            let hash = caps.get(2).expect("hash group is not optional");
            let path = caps.get(5).expect("path group is not optional");
            FileEntry {
                recorded_hash: hash.as_str(),
                import: &caps[4] == "1",
                relative_path: path.as_str(),
                span: whole.range(),
                hash_span: hash.range(),
            }
        })
        .collect()
}

/// Rebuilds manifest text with some entries' hashes replaced.
///
/// `replacements` pairs each entry's hash span with its new value and must be
/// in document order. All other bytes are copied unchanged.
pub fn splice_hashes<'r>(
    text: &str,
    replacements: impl IntoIterator<Item = (Range<usize>, &'r str)>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (span, hash) in replacements {
        out.push_str(&text[cursor..span.start]);
        out.push_str(hash);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
