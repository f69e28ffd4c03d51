//! Content loaders for reading agent data from files.
//!
//! Opening books are RON, bot configuration is TOML. Both deserialize straight
//! into the types the runtime consumes.

pub mod config;
pub mod openings;

pub use config::ConfigLoader;
pub use openings::{BuildOrderLoader, OpeningBook, OpeningSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
