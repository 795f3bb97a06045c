//! Manifest synchronization for Civilization V style `.modinfo` files
//!
//! A manifest records an MD5 digest for every file the mod ships. This crate
//! finds those entries, recomputes each digest from disk and rewrites the
//! stale ones in place, leaving every other byte of the manifest unchanged.
//!
//! ```text
//!                 modinfo-cli
//!                      |
//!                 modinfo-core
//!        (entry scan, sync, discovery)
//!                      |
//!                  modinfo-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use modinfo_core::synchronize;
//!
//! fn example() -> modinfo_core::Result<()> {
//!     let report = synchronize("VoxDeorum.modinfo")?;
//!     for line in report.log_lines() {
//!         println!("{line}");
//!     }
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod entry;
pub mod error;
pub mod locate;
pub mod sync;

pub use entry::{FileEntry, parse_entries};
pub use error::{Error, Result};
pub use locate::{default_manifest, find_manifest};
pub use sync::{EntryOutcome, EntryRecord, ManifestSync, SyncReport, synchronize};
