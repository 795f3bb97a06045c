//! Filesystem layer for modinfo-sync
//!
//! Provides normalized path handling, MD5 file digests and safe I/O operations.

pub mod checksum;
pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
