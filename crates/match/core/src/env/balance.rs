//! Balance oracle: combat and board tuning tables.
//!
//! Numeric tuning is configuration, not contract: the engine reads every
//! constant through [`BalanceOracle`], so hosts can rebalance without
//! touching engine code. [`BalanceTable`] is the concrete table carrying the
//! reference tuning in its `Default`.

use crate::board::Symbol;

/// Oracle providing combat balance and board-alphabet parameters.
pub trait BalanceOracle: Send + Sync {
    fn damage(&self) -> DamageParams;
    fn healing(&self) -> HealingParams;

    /// Escalating combo multiplier, in percent, for the 1-based round index.
    /// Must be monotonically non-decreasing in `round`.
    fn combo_percent(&self, round: u32) -> u32;

    /// Chebyshev radius of an Area tile's blast.
    fn blast_radius(&self) -> i32;

    /// Size of the symbol alphabet used for refills and generation.
    fn symbol_count(&self) -> u8;
}

/// Flat damage parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageParams {
    /// Damage credited per cleared tile before multipliers.
    pub tile_value: u32,
    /// Flat bonus when an Area tile fires.
    pub area_bonus: u32,
    /// Flat bonus when a Cross tile fires.
    pub cross_bonus: u32,
    /// Flat bonus when a Wild tile fires.
    pub wild_bonus: u32,
    /// Multiplier applied to Area bonuses under `double-area-damage`.
    pub area_amplifier: u32,
    /// Global percent multiplier under `bonus-on-combo`.
    pub combo_bonus_percent: u32,
}

/// Healing parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealingParams {
    /// Health restored per cleared healing-symbol tile.
    pub per_tile: u32,
    /// The symbol that heals under `heal-on-symbol`.
    pub symbol: Symbol,
}

impl HealingParams {
    pub const fn new(per_tile: u32, symbol: Symbol) -> Self {
        Self { per_tile, symbol }
    }
}

/// Concrete balance table with the reference tuning.
///
/// Hosts typically deserialize this from a TOML content file; missing keys
/// fall back to the reference values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceTable {
    pub tile_value: u32,
    pub area_bonus: u32,
    pub cross_bonus: u32,
    pub wild_bonus: u32,
    pub area_amplifier: u32,
    pub combo_bonus_percent: u32,
    /// Combo percent ladder indexed by round; rounds past the end reuse the
    /// last entry.
    pub combo_ladder: Vec<u32>,
    pub blast_radius: i32,
    pub heal_per_tile: u32,
    pub healing_symbol: u8,
    pub symbol_count: u8,
}

impl Default for BalanceTable {
    fn default() -> Self {
        Self {
            tile_value: 10,
            area_bonus: 100,
            cross_bonus: 150,
            wild_bonus: 0,
            area_amplifier: 2,
            combo_bonus_percent: 150,
            combo_ladder: vec![100, 150, 200, 300, 500],
            blast_radius: 2,
            heal_per_tile: 2,
            healing_symbol: 0,
            symbol_count: 5,
        }
    }
}

impl BalanceOracle for BalanceTable {
    fn damage(&self) -> DamageParams {
        DamageParams {
            tile_value: self.tile_value,
            area_bonus: self.area_bonus,
            cross_bonus: self.cross_bonus,
            wild_bonus: self.wild_bonus,
            area_amplifier: self.area_amplifier,
            combo_bonus_percent: self.combo_bonus_percent,
        }
    }

    fn healing(&self) -> HealingParams {
        HealingParams::new(self.heal_per_tile, Symbol(self.healing_symbol))
    }

    fn combo_percent(&self, round: u32) -> u32 {
        if self.combo_ladder.is_empty() {
            return 100;
        }
        let index = (round.max(1) as usize - 1).min(self.combo_ladder.len() - 1);
        self.combo_ladder[index]
    }

    fn blast_radius(&self) -> i32 {
        self.blast_radius
    }

    fn symbol_count(&self) -> u8 {
        self.symbol_count
    }
}
