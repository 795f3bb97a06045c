//! Hash synchronization between a manifest and the files it references

mod engine;
mod report;

pub use engine::{ManifestSync, synchronize};
pub use report::{EntryOutcome, EntryRecord, SyncReport};
