//! Round damage and healing computation.

use crate::board::{Grid, TileModifier};
use crate::chain::ChainResolution;
use crate::env::BalanceOracle;

use super::modifiers::{BattleModifier, ModifierSet};

/// Damage and healing accrued by one cascade round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundScore {
    pub damage: u32,
    pub healing: u32,
}

/// Scores one resolved round.
///
/// # Formula
///
/// ```text
/// subtotal = cleared × tile_value + Σ trigger_bonus
/// damage   = subtotal × combo_percent(round) / 100
/// damage  ×= combo_bonus_percent / 100       (bonus-on-combo active)
/// healing  = healing-symbol clears × heal_per_tile   (heal-on-symbol active)
/// ```
///
/// `trigger_bonus` is the flat bonus of each fired modifier; Area bonuses
/// are multiplied by `area_amplifier` while `double-area-damage` is active.
/// Percent arithmetic floors, keeping every score integral and reproducible.
///
/// `grid` must be the pre-clear grid so cleared symbols are still readable.
pub fn score_round(
    grid: &Grid,
    resolution: &ChainResolution,
    round: u32,
    active: ModifierSet,
    balance: &(impl BalanceOracle + ?Sized),
) -> RoundScore {
    let damage_params = balance.damage();

    let mut subtotal = resolution.cleared.len() as u32 * damage_params.tile_value;
    for effect in &resolution.triggered {
        subtotal += match effect.modifier {
            TileModifier::Area => {
                if active.has(BattleModifier::DoubleAreaDamage) {
                    damage_params.area_bonus * damage_params.area_amplifier
                } else {
                    damage_params.area_bonus
                }
            }
            TileModifier::Cross => damage_params.cross_bonus,
            TileModifier::Wild => damage_params.wild_bonus,
            TileModifier::None => 0,
        };
    }

    let mut damage = subtotal * balance.combo_percent(round) / 100;
    if active.has(BattleModifier::BonusOnCombo) {
        damage = damage * damage_params.combo_bonus_percent / 100;
    }

    let healing = if active.has(BattleModifier::HealOnSymbol) {
        let healing_params = balance.healing();
        let healed = resolution
            .cleared
            .iter()
            .filter(|&&position| {
                grid.get(position).and_then(|tile| tile.symbol()) == Some(healing_params.symbol)
            })
            .count() as u32;
        healed * healing_params.per_tile
    } else {
        0
    };

    RoundScore { damage, healing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, Symbol, Tile, grid_fixture};
    use crate::chain::{TriggeredEffect, resolve_chains};
    use crate::env::BalanceTable;

    fn four_clear_resolution() -> ChainResolution {
        ChainResolution {
            cleared: (2..=5).map(|col| Position::new(3, col)).collect(),
            triggered: Vec::new(),
        }
    }

    fn eight_by_eight() -> Grid {
        let rows: Vec<String> = (0..8)
            .map(|row| {
                (0..8)
                    .map(|col| char::from(b'a' + ((row + col) % 3) as u8))
                    .collect()
            })
            .collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        grid_fixture(&refs)
    }

    #[test]
    fn four_clears_at_round_one_score_forty() {
        let grid = eight_by_eight();
        let score = score_round(
            &grid,
            &four_clear_resolution(),
            1,
            ModifierSet::empty(),
            &BalanceTable::default(),
        );
        assert_eq!(score.damage, 40);
        assert_eq!(score.healing, 0);
    }

    #[test]
    fn combo_ladder_scales_later_rounds() {
        let grid = eight_by_eight();
        let balance = BalanceTable::default();
        let resolution = four_clear_resolution();
        let by_round: Vec<u32> = (1..=6)
            .map(|round| score_round(&grid, &resolution, round, ModifierSet::empty(), &balance).damage)
            .collect();
        assert_eq!(by_round, vec![40, 60, 80, 120, 200, 200]);
    }

    #[test]
    fn area_trigger_adds_its_flat_bonus() {
        let grid = eight_by_eight();
        let mut resolution = four_clear_resolution();
        resolution.triggered.push(TriggeredEffect {
            position: Position::new(3, 2),
            modifier: TileModifier::Area,
        });
        let score = score_round(
            &grid,
            &resolution,
            1,
            ModifierSet::empty(),
            &BalanceTable::default(),
        );
        assert_eq!(score.damage, 140);
    }

    #[test]
    fn double_area_damage_amplifies_only_the_area_contribution() {
        let grid = eight_by_eight();
        let mut resolution = four_clear_resolution();
        resolution.triggered.push(TriggeredEffect {
            position: Position::new(3, 2),
            modifier: TileModifier::Area,
        });
        resolution.triggered.push(TriggeredEffect {
            position: Position::new(3, 3),
            modifier: TileModifier::Cross,
        });
        let balance = BalanceTable::default();

        let plain = score_round(&grid, &resolution, 1, ModifierSet::empty(), &balance);
        let doubled = score_round(
            &grid,
            &resolution,
            1,
            ModifierSet::DOUBLE_AREA_DAMAGE,
            &balance,
        );
        // Only the 100-point area bonus doubles; clears and the cross bonus
        // are untouched.
        assert_eq!(plain.damage, 40 + 100 + 150);
        assert_eq!(doubled.damage, 40 + 200 + 150);
    }

    #[test]
    fn bonus_on_combo_multiplies_the_final_damage() {
        let grid = eight_by_eight();
        let score = score_round(
            &grid,
            &four_clear_resolution(),
            1,
            ModifierSet::BONUS_ON_COMBO,
            &BalanceTable::default(),
        );
        assert_eq!(score.damage, 60);
    }

    #[test]
    fn healing_counts_only_the_designated_symbol() {
        // Clears cover two 'a' tiles (the healing symbol) and one 'b'.
        let mut grid = grid_fixture(&["abc", "bca", "cab"]);
        grid.set(Position::new(0, 1), Tile::plain(Symbol(0)));
        let resolution = resolve_chains(
            &grid,
            [Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)],
            1,
        );

        let balance = BalanceTable::default();
        let without = score_round(&grid, &resolution, 1, ModifierSet::empty(), &balance);
        assert_eq!(without.healing, 0);

        let with = score_round(&grid, &resolution, 1, ModifierSet::HEAL_ON_SYMBOL, &balance);
        assert_eq!(with.healing, 4);
    }
}
