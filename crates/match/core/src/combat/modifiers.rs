//! Host-supplied battle modifiers.
//!
//! The host acquires these through its own progression and reward systems
//! and passes the active set into every cascade call; the engine never
//! persists them.

use bitflags::bitflags;

/// Named battle modifiers a host can activate.
///
/// String forms are kebab-case (`"double-area-damage"`), matching the names
/// hosts use in content files and reward definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BattleModifier {
    /// Area-tile triggers deal amplified bonus damage.
    DoubleAreaDamage,
    /// Clearing the designated healing symbol restores health.
    HealOnSymbol,
    /// Every round's damage gains a flat global multiplier.
    BonusOnCombo,
}

bitflags! {
    /// Packed set of active [`BattleModifier`]s.
    ///
    /// Read-only from the engine's perspective: damage and healing formulas
    /// consult it, nothing writes it back.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ModifierSet: u8 {
        const DOUBLE_AREA_DAMAGE = 1 << 0;
        const HEAL_ON_SYMBOL     = 1 << 1;
        const BONUS_ON_COMBO     = 1 << 2;
    }
}

impl ModifierSet {
    /// Returns the flag bit for a named modifier.
    pub const fn flag(modifier: BattleModifier) -> Self {
        match modifier {
            BattleModifier::DoubleAreaDamage => Self::DOUBLE_AREA_DAMAGE,
            BattleModifier::HealOnSymbol => Self::HEAL_ON_SYMBOL,
            BattleModifier::BonusOnCombo => Self::BONUS_ON_COMBO,
        }
    }

    /// True when the named modifier is active.
    #[inline]
    pub fn has(self, modifier: BattleModifier) -> bool {
        self.contains(Self::flag(modifier))
    }
}

impl From<BattleModifier> for ModifierSet {
    fn from(modifier: BattleModifier) -> Self {
        Self::flag(modifier)
    }
}

impl FromIterator<BattleModifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = BattleModifier>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, modifier| set | Self::flag(modifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn names_round_trip_in_kebab_case() {
        assert_eq!(BattleModifier::DoubleAreaDamage.to_string(), "double-area-damage");
        assert_eq!(
            BattleModifier::from_str("heal-on-symbol").unwrap(),
            BattleModifier::HealOnSymbol
        );
        assert!(BattleModifier::from_str("storm-caller").is_err());
    }

    #[test]
    fn set_collects_from_named_modifiers() {
        let set: ModifierSet = [BattleModifier::HealOnSymbol, BattleModifier::BonusOnCombo]
            .into_iter()
            .collect();
        assert!(set.has(BattleModifier::HealOnSymbol));
        assert!(set.has(BattleModifier::BonusOnCombo));
        assert!(!set.has(BattleModifier::DoubleAreaDamage));
    }
}
