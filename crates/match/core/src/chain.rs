//! Special-tile chain resolution.
//!
//! Expands an initial matched set by firing modifier effects over a
//! worklist. Newly swept cells re-enter the worklist, so effects revealed
//! mid-chain fire too, but every modifier fires at most once per round. The
//! worklist only grows with cells not yet in the clear set, which bounds the
//! whole resolution by the board area.

use std::collections::{BTreeSet, VecDeque};

use crate::board::{Grid, Position, Symbol, Tile, TileModifier};

/// One modifier firing during chain resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggeredEffect {
    pub position: Position,
    pub modifier: TileModifier,
}

/// Aggregate clear set plus the effects that produced it.
///
/// `cleared` is always a superset of the seed positions; `triggered` records
/// firings in deterministic worklist order so damage can be bucketed by
/// cause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainResolution {
    pub cleared: BTreeSet<Position>,
    pub triggered: Vec<TriggeredEffect>,
}

/// Expands `seeds` with every chain-triggered effect.
///
/// Off-board seeds are ignored. `blast_radius` is the Chebyshev radius of an
/// Area tile's sweep.
pub fn resolve_chains(
    grid: &Grid,
    seeds: impl IntoIterator<Item = Position>,
    blast_radius: i32,
) -> ChainResolution {
    let mut cleared: BTreeSet<Position> = BTreeSet::new();
    let mut worklist: VecDeque<Position> = VecDeque::new();
    for seed in seeds {
        if grid.contains(seed) && cleared.insert(seed) {
            worklist.push_back(seed);
        }
    }

    let mut fired: BTreeSet<Position> = BTreeSet::new();
    let mut triggered = Vec::new();
    while let Some(position) = worklist.pop_front() {
        let Some(Tile::Filled { symbol, modifier }) = grid.get(position) else {
            continue;
        };
        if !modifier.is_effect() || !fired.insert(position) {
            continue;
        }
        triggered.push(TriggeredEffect { position, modifier });

        for swept in affected_cells(grid, position, symbol, modifier, blast_radius) {
            if cleared.insert(swept) {
                worklist.push_back(swept);
            }
        }
    }

    ChainResolution { cleared, triggered }
}

/// Cells swept by one modifier firing, including the firing cell itself.
fn affected_cells(
    grid: &Grid,
    center: Position,
    symbol: Symbol,
    modifier: TileModifier,
    blast_radius: i32,
) -> Vec<Position> {
    let side = grid.side() as i32;
    match modifier {
        TileModifier::None => Vec::new(),
        TileModifier::Area => {
            let mut cells = Vec::new();
            for dr in -blast_radius..=blast_radius {
                for dc in -blast_radius..=blast_radius {
                    let cell = center.offset(dr, dc);
                    if grid.contains(cell) {
                        cells.push(cell);
                    }
                }
            }
            cells
        }
        TileModifier::Cross => {
            let mut cells = Vec::new();
            for col in 0..side {
                cells.push(Position::new(center.row, col));
            }
            for row in 0..side {
                cells.push(Position::new(row, center.col));
            }
            cells
        }
        TileModifier::Wild => grid
            .positions()
            .filter(|&cell| grid.get(cell).and_then(|tile| tile.symbol()) == Some(symbol))
            .collect(),
    }
}
