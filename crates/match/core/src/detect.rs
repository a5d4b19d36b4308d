//! Match detection and special-tile planning.
//!
//! Rows and columns are scanned independently for maximal runs, so
//! overlapping runs within one axis cannot occur. Overlap *between* axes is
//! expected and load-bearing: a cell inside both a row-run and a col-run is
//! the intersection that births the highest-tier special tile.

use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;

use crate::board::{Grid, Position, Symbol, TileModifier};
use crate::config::BoardConfig;

/// Minimum run length that counts as a match.
pub const MIN_RUN: usize = 3;

/// Run length that earns an Area tile.
pub const AREA_RUN: usize = 4;

/// Run length from which a run earns a Wild tile instead.
pub const WILD_RUN: usize = 5;

/// Scan axis of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchAxis {
    Row,
    Col,
}

/// Run positions, bounded by the largest supported board side.
pub type RunPositions = ArrayVec<Position, { BoardConfig::MAX_SIDE }>;

/// A maximal run of at least [`MIN_RUN`] identical symbols along one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRun {
    pub axis: MatchAxis,
    pub symbol: Symbol,
    /// Cells of the run in increasing coordinate order; the first element is
    /// the leftmost or topmost cell.
    pub positions: RunPositions,
}

impl MatchRun {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true when the run covers the given cell.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// Scans the grid for every maximal run of three or more identical symbols.
///
/// Rows are scanned top to bottom, then columns left to right, so the result
/// order is deterministic. Vacant cells break runs.
pub fn detect_matches(grid: &Grid) -> Vec<MatchRun> {
    let mut runs = Vec::new();
    let side = grid.side() as i32;
    for row in 0..side {
        scan_line(
            grid,
            (0..side).map(|col| Position::new(row, col)),
            MatchAxis::Row,
            &mut runs,
        );
    }
    for col in 0..side {
        scan_line(
            grid,
            (0..side).map(|row| Position::new(row, col)),
            MatchAxis::Col,
            &mut runs,
        );
    }
    runs
}

fn scan_line(
    grid: &Grid,
    line: impl Iterator<Item = Position>,
    axis: MatchAxis,
    out: &mut Vec<MatchRun>,
) {
    let mut run: RunPositions = ArrayVec::new();
    let mut run_symbol: Option<Symbol> = None;
    for position in line {
        let symbol = grid.get(position).and_then(|tile| tile.symbol());
        if symbol.is_some() && symbol == run_symbol {
            run.push(position);
            continue;
        }
        emit_run(axis, run_symbol, &run, out);
        run.clear();
        run_symbol = symbol;
        if symbol.is_some() {
            run.push(position);
        }
    }
    emit_run(axis, run_symbol, &run, out);
}

fn emit_run(
    axis: MatchAxis,
    symbol: Option<Symbol>,
    positions: &RunPositions,
    out: &mut Vec<MatchRun>,
) {
    if let Some(symbol) = symbol
        && positions.len() >= MIN_RUN
    {
        out.push(MatchRun {
            axis,
            symbol,
            positions: positions.clone(),
        });
    }
}

/// A special tile scheduled for creation once the round's clears land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusTile {
    pub position: Position,
    pub modifier: TileModifier,
    /// Symbol the new tile keeps, taken from the run that earned it.
    pub symbol: Symbol,
}

/// Plans the special tiles earned by the given runs.
///
/// Policy, in ascending precedence:
/// 1. a run of exactly [`AREA_RUN`] creates an [`TileModifier::Area`] tile,
/// 2. a run of [`WILD_RUN`] or more creates a [`TileModifier::Wild`] tile,
/// 3. a cell inside both a qualifying row-run and col-run becomes a
///    [`TileModifier::Cross`] tile, overriding the others at that cell only.
///
/// The anchor for rules 1 and 2 prefers `hint` (the player's last swap
/// destination) when it lies inside the run; otherwise the run's first cell.
/// Cells claimed by a Cross are skipped, so a long run intersecting another
/// still earns its own tile on the remaining cells; a run whose every cell is
/// Cross-claimed earns nothing extra.
pub fn plan_bonus_tiles(grid: &Grid, runs: &[MatchRun], hint: Option<Position>) -> Vec<BonusTile> {
    let mut row_cells: BTreeSet<Position> = BTreeSet::new();
    let mut col_cells: BTreeSet<Position> = BTreeSet::new();
    for run in runs {
        let cells = match run.axis {
            MatchAxis::Row => &mut row_cells,
            MatchAxis::Col => &mut col_cells,
        };
        cells.extend(run.positions.iter().copied());
    }
    let crossed: BTreeSet<Position> = row_cells.intersection(&col_cells).copied().collect();

    let mut planned: BTreeMap<Position, BonusTile> = BTreeMap::new();
    for &position in &crossed {
        if let Some(symbol) = grid.get(position).and_then(|tile| tile.symbol()) {
            planned.insert(
                position,
                BonusTile {
                    position,
                    modifier: TileModifier::Cross,
                    symbol,
                },
            );
        }
    }

    for run in runs {
        let modifier = if run.len() >= WILD_RUN {
            TileModifier::Wild
        } else if run.len() == AREA_RUN {
            TileModifier::Area
        } else {
            continue;
        };

        let anchor = hint
            .filter(|position| run.contains(*position) && !crossed.contains(position))
            .or_else(|| {
                run.positions
                    .iter()
                    .copied()
                    .find(|position| !crossed.contains(position))
            });
        let Some(position) = anchor else {
            continue;
        };

        let candidate = BonusTile {
            position,
            modifier,
            symbol: run.symbol,
        };
        let entry = planned.entry(position).or_insert(candidate);
        if modifier.precedence() > entry.modifier.precedence() {
            *entry = candidate;
        }
    }

    planned.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid_fixture;

    #[test]
    fn finds_a_horizontal_run() {
        let grid = grid_fixture(&[
            "aaab", //
            "bcab", //
            "cabc", //
            "bcba",
        ]);
        let runs = detect_matches(&grid);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].axis, MatchAxis::Row);
        assert_eq!(runs[0].symbol, Symbol(0));
        assert_eq!(
            runs[0].positions.as_slice(),
            &[
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
            ]
        );
    }

    #[test]
    fn finds_a_vertical_run() {
        let grid = grid_fixture(&[
            "abcb", //
            "acab", //
            "abbc", //
            "babc",
        ]);
        let runs = detect_matches(&grid);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].axis, MatchAxis::Col);
        assert_eq!(
            runs[0].positions.as_slice(),
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
            ]
        );
    }

    #[test]
    fn vacant_cells_break_runs() {
        let grid = grid_fixture(&[
            "aa.a", //
            "bcab", //
            "cabc", //
            "bcba",
        ]);
        assert!(detect_matches(&grid).is_empty());
    }

    #[test]
    fn maximal_runs_are_not_split() {
        let grid = grid_fixture(&[
            "aaaa", //
            "bcab", //
            "cabc", //
            "bcba",
        ]);
        let runs = detect_matches(&grid);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 4);
    }

    #[test]
    fn four_run_earns_an_area_tile_at_the_run_start() {
        let grid = grid_fixture(&[
            "aaaa", //
            "bcab", //
            "cabc", //
            "bcba",
        ]);
        let runs = detect_matches(&grid);
        let bonuses = plan_bonus_tiles(&grid, &runs, None);
        assert_eq!(
            bonuses,
            vec![BonusTile {
                position: Position::new(0, 0),
                modifier: TileModifier::Area,
                symbol: Symbol(0),
            }]
        );
    }

    #[test]
    fn five_run_earns_a_wild_tile() {
        let grid = grid_fixture(&[
            "aaaaa", //
            "bcabc", //
            "cabca", //
            "bcbab", //
            "cacbc",
        ]);
        let runs = detect_matches(&grid);
        let bonuses = plan_bonus_tiles(&grid, &runs, None);
        assert_eq!(bonuses.len(), 1);
        assert_eq!(bonuses[0].modifier, TileModifier::Wild);
    }

    #[test]
    fn hint_inside_the_run_anchors_the_bonus() {
        let grid = grid_fixture(&[
            "aaaa", //
            "bcab", //
            "cabc", //
            "bcba",
        ]);
        let runs = detect_matches(&grid);
        let hint = Some(Position::new(0, 2));
        let bonuses = plan_bonus_tiles(&grid, &runs, hint);
        assert_eq!(bonuses[0].position, Position::new(0, 2));
    }

    #[test]
    fn hint_outside_the_run_is_ignored() {
        let grid = grid_fixture(&[
            "aaaa", //
            "bcab", //
            "cabc", //
            "bcba",
        ]);
        let runs = detect_matches(&grid);
        let bonuses = plan_bonus_tiles(&grid, &runs, Some(Position::new(3, 3)));
        assert_eq!(bonuses[0].position, Position::new(0, 0));
    }

    #[test]
    fn intersection_earns_a_cross_tile() {
        // Row run a(1,0..=2) crosses col run a(0..=2,1) at (1,1).
        let grid = grid_fixture(&[
            "bacb", //
            "aaab", //
            "cacc", //
            "bcba",
        ]);
        let runs = detect_matches(&grid);
        assert_eq!(runs.len(), 2);
        let bonuses = plan_bonus_tiles(&grid, &runs, None);
        assert_eq!(
            bonuses,
            vec![BonusTile {
                position: Position::new(1, 1),
                modifier: TileModifier::Cross,
                symbol: Symbol(0),
            }]
        );
    }

    #[test]
    fn crossed_long_runs_keep_their_own_tiles_elsewhere() {
        // A five-run across row 1 intersects a four-run down column 2 at
        // (1,2): the intersection becomes a Cross, the five-run anchors its
        // Wild on its first unclaimed cell, and the column run anchors its
        // Area below the intersection.
        let grid = grid_fixture(&[
            "bcdcb", //
            "aaaaa", //
            "cbacd", //
            "dcaec", //
            "cdade",
        ]);
        let runs = detect_matches(&grid);
        assert_eq!(runs.len(), 2);
        let bonuses = plan_bonus_tiles(&grid, &runs, None);
        assert_eq!(bonuses.len(), 3);
        assert!(bonuses.contains(&BonusTile {
            position: Position::new(1, 2),
            modifier: TileModifier::Cross,
            symbol: Symbol(0),
        }));
        assert!(bonuses.contains(&BonusTile {
            position: Position::new(1, 0),
            modifier: TileModifier::Wild,
            symbol: Symbol(0),
        }));
        assert!(bonuses.contains(&BonusTile {
            position: Position::new(2, 2),
            modifier: TileModifier::Area,
            symbol: Symbol(0),
        }));
    }
}
