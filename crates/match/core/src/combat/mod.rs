//! Damage scoring and host-supplied battle modifiers.
mod damage;
mod modifiers;

pub use damage::{RoundScore, score_round};
pub use modifiers::{BattleModifier, ModifierSet};
