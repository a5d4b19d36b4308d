//! Content loaders for reading game data from files.
//!
//! Loaders convert TOML/RON files into engine-ready values. Parse entry
//! points also accept plain strings so hosts can embed content.

pub mod balance;
pub mod symbols;

pub use balance::{BalanceLoader, parse_modifier_list};
pub use symbols::SymbolLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
