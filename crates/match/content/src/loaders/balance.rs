//! Combat balance loader.

use std::path::Path;
use std::str::FromStr;

use match_core::{BalanceTable, BattleModifier, ModifierSet};

use crate::loaders::{LoadResult, read_file};

/// Loader for combat balance tables from TOML files.
///
/// Missing keys fall back to the reference tuning, so content files only
/// need to state what they change.
pub struct BalanceLoader;

impl BalanceLoader {
    /// Load a balance table from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BalanceTable> {
        Self::from_toml(&read_file(path)?)
    }

    /// Parse a balance table from TOML text.
    pub fn from_toml(text: &str) -> LoadResult<BalanceTable> {
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse balance TOML: {}", e))
    }
}

/// Parses host-facing modifier names (`"double-area-damage"`, ...) into a
/// packed [`ModifierSet`].
pub fn parse_modifier_list<S: AsRef<str>>(names: &[S]) -> LoadResult<ModifierSet> {
    let mut set = ModifierSet::empty();
    for name in names {
        let name = name.as_ref();
        let modifier = BattleModifier::from_str(name)
            .map_err(|_| anyhow::anyhow!("Unknown battle modifier: {}", name))?;
        set |= ModifierSet::flag(modifier);
    }
    Ok(set)
}
