//! Symbol alphabet loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::symbols::SymbolSet;

/// Loader for symbol alphabets from RON files.
pub struct SymbolLoader;

impl SymbolLoader {
    /// Load a symbol set from a RON file.
    pub fn load(path: &Path) -> LoadResult<SymbolSet> {
        Self::from_ron(&read_file(path)?)
    }

    /// Parse a symbol set from RON text.
    ///
    /// Validates that the alphabet is non-empty and that the healing
    /// designation, if present, names a real symbol.
    pub fn from_ron(text: &str) -> LoadResult<SymbolSet> {
        let set: SymbolSet =
            ron::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse symbol RON: {}", e))?;
        anyhow::ensure!(!set.is_empty(), "Symbol set must define at least one symbol");
        if let Some(healing) = set.healing {
            anyhow::ensure!(
                (healing as usize) < set.len(),
                "Healing symbol index {} is outside the alphabet of {}",
                healing,
                set.len()
            );
        }
        Ok(set)
    }
}
