//! Shared test utilities for the modinfo-sync workspace.
//!
//! It is a dev-dependency only, never published.

pub mod fixture;

pub use fixture::{TestMod, ZERO_HASH, file_entry};
