//! Gravity compaction, vacancy refill, and initial board generation.
//!
//! Refill and generation are the only randomized operations in the engine.
//! Every draw is keyed on `(seed, round, cell, attempt)` through
//! [`mix_seed`], so a fixed game seed replays the same board and the same
//! refills.

use crate::config::BoardConfig;
use crate::env::{RngOracle, mix_seed};
use crate::error::{EngineError, ErrorSeverity};

use super::grid::{Grid, Position};
use super::tile::{Symbol, Tile};

/// Compacts each column downward, preserving relative order.
///
/// Non-vacant tiles settle toward the bottom row; vacancies accumulate at the
/// top. No tile ever changes column.
pub fn apply_gravity(grid: &mut Grid) {
    let side = grid.side() as i32;
    for col in 0..side {
        let mut settled: Vec<Tile> = Vec::with_capacity(side as usize);
        for row in (0..side).rev() {
            let tile = grid.get(Position::new(row, col)).unwrap_or_default();
            if !tile.is_vacant() {
                settled.push(tile);
            }
        }
        let mut settled = settled.into_iter();
        for row in (0..side).rev() {
            let tile = settled.next().unwrap_or(Tile::Vacant);
            grid.set(Position::new(row, col), tile);
        }
    }
}

/// Fills every vacancy with a freshly drawn plain tile.
///
/// Draws are uniform over the alphabet. Refill never rejects matches: runs
/// spawned here are exactly what the next cascade scan feeds on.
pub fn refill(grid: &mut Grid, rng: &(impl RngOracle + ?Sized), symbol_count: u8, seed: u64, round: u32) {
    let side = grid.side() as i32;
    for row in 0..side {
        for col in 0..side {
            let position = Position::new(row, col);
            if !grid.get(position).is_some_and(|tile| tile.is_vacant()) {
                continue;
            }
            let cell = (row * side + col) as u32;
            let draw = rng.pick(mix_seed(seed, round, cell, 0), symbol_count as u32);
            grid.set(position, Tile::plain(Symbol(draw as u8)));
        }
    }
}

/// Board generation failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerateError {
    /// The alphabet cannot satisfy the no-spawn-match constraint: with fewer
    /// than three symbols, both look-backs can exclude every choice.
    #[error("alphabet of {count} symbols cannot avoid spawn matches (need at least 3)")]
    AlphabetTooSmall { count: u8 },

    /// Side length outside the supported range.
    #[error("side {side} is outside the supported range {min}..={max}")]
    UnsupportedSide { side: usize, min: usize, max: usize },
}

impl EngineError for GenerateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlphabetTooSmall { .. } => "GENERATE_ALPHABET_TOO_SMALL",
            Self::UnsupportedSide { .. } => "GENERATE_UNSUPPORTED_SIDE",
        }
    }
}

/// Generates a fully populated board with no pre-existing matches.
///
/// Cells fill row-major. Each draw is rejected while it would complete a
/// three-run with the two already-placed neighbors above or to the left; on
/// rejection the alphabet is scanned in order starting from the rolled
/// symbol, which keeps generation a pure function of `(seed, cell)`.
pub fn generate_initial_grid(
    config: &BoardConfig,
    symbol_count: u8,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> Result<Grid, GenerateError> {
    if !(BoardConfig::MIN_SIDE..=BoardConfig::MAX_SIDE).contains(&config.side) {
        return Err(GenerateError::UnsupportedSide {
            side: config.side,
            min: BoardConfig::MIN_SIDE,
            max: BoardConfig::MAX_SIDE,
        });
    }
    if symbol_count < 3 {
        return Err(GenerateError::AlphabetTooSmall {
            count: symbol_count,
        });
    }

    let side = config.side as i32;
    let mut grid = Grid::vacant(config.side);
    for row in 0..side {
        for col in 0..side {
            let cell = (row * side + col) as u32;
            let rolled = rng.pick(mix_seed(seed, 0, cell, 0), symbol_count as u32) as u8;

            // At most two symbols are excluded by the look-backs, so with a
            // three-symbol alphabet the scan always lands.
            let mut chosen = None;
            for step in 0..symbol_count as u32 {
                let candidate = Symbol(((rolled as u32 + step) % symbol_count as u32) as u8);
                if !completes_run(&grid, row, col, candidate) {
                    chosen = Some(candidate);
                    break;
                }
            }
            let Some(symbol) = chosen else {
                return Err(GenerateError::AlphabetTooSmall {
                    count: symbol_count,
                });
            };
            grid.set(Position::new(row, col), Tile::plain(symbol));
        }
    }
    Ok(grid)
}

/// True when placing `symbol` at `(row, col)` completes a vertical or
/// horizontal three-run with already-placed neighbors.
fn completes_run(grid: &Grid, row: i32, col: i32, symbol: Symbol) -> bool {
    let same = |dr: i32, dc: i32| {
        grid.get(Position::new(row + dr, col + dc))
            .and_then(|tile| tile.symbol())
            == Some(symbol)
    };
    (same(-1, 0) && same(-2, 0)) || (same(0, -1) && same(0, -2))
}
