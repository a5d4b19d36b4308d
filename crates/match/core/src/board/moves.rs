//! Swap validation and legal-move probing.

use crate::detect::detect_matches;
use crate::error::{EngineError, ErrorSeverity};

use super::grid::{Grid, Position};

/// Returns true when two positions are orthogonal neighbors.
///
/// Symmetric by construction; diagonal cells are never adjacent.
#[inline]
pub fn are_adjacent(a: Position, b: Position) -> bool {
    a.manhattan(b) == 1
}

/// Rejection reasons for a requested swap.
///
/// A rejected swap mutates nothing: the caller's grid is exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapError {
    /// A requested position lies outside the board.
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    /// The two positions are not orthogonal neighbors.
    #[error("positions {0} and {1} are not adjacent")]
    NotAdjacent(Position, Position),
}

impl EngineError for SwapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds(_) => "SWAP_OUT_OF_BOUNDS",
            Self::NotAdjacent(_, _) => "SWAP_NOT_ADJACENT",
        }
    }
}

/// Exchanges two adjacent tiles, returning the resulting grid.
///
/// The input grid is untouched. Applying the same swap to the result restores
/// the original grid. Whether the swap actually produces a match is a
/// separate question answered by the cascade's first scan (see
/// [`CascadeVerdict::NoMatchOnSwap`](crate::engine::CascadeVerdict)).
pub fn swap(grid: &Grid, a: Position, b: Position) -> Result<Grid, SwapError> {
    let tile_a = grid.get(a).ok_or(SwapError::OutOfBounds(a))?;
    let tile_b = grid.get(b).ok_or(SwapError::OutOfBounds(b))?;
    if !are_adjacent(a, b) {
        return Err(SwapError::NotAdjacent(a, b));
    }

    let mut next = grid.clone();
    next.set(a, tile_b);
    next.set(b, tile_a);
    Ok(next)
}

/// Probes every adjacent swap and returns the first pair that would produce
/// a match.
///
/// Probing is exhaustive in row-major order, trying the rightward swap before
/// the downward one, so the answer is stable for a given grid. Returns `None`
/// when the board has no legal move; whether to reshuffle then is the host's
/// call.
pub fn find_potential_move(grid: &Grid) -> Option<(Position, Position)> {
    for here in grid.positions() {
        for other in [here.offset(0, 1), here.offset(1, 0)] {
            if !grid.contains(other) {
                continue;
            }
            let Ok(probe) = swap(grid, here, other) else {
                continue;
            };
            if !detect_matches(&probe).is_empty() {
                return Some((here, other));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::super::grid_fixture;
    use super::*;

    #[test]
    fn adjacency_is_symmetric() {
        for row_a in 0..4 {
            for col_a in 0..4 {
                for row_b in 0..4 {
                    for col_b in 0..4 {
                        let a = Position::new(row_a, col_a);
                        let b = Position::new(row_b, col_b);
                        assert_eq!(are_adjacent(a, b), are_adjacent(b, a));
                    }
                }
            }
        }
    }

    #[test]
    fn diagonals_and_self_are_not_adjacent() {
        let origin = Position::new(1, 1);
        assert!(!are_adjacent(origin, origin));
        assert!(!are_adjacent(origin, Position::new(2, 2)));
        assert!(!are_adjacent(origin, Position::new(0, 0)));
        assert!(are_adjacent(origin, Position::new(1, 2)));
        assert!(are_adjacent(origin, Position::new(0, 1)));
    }

    #[test]
    fn swap_rejects_non_adjacent_positions() {
        let grid = grid_fixture(&["abc", "bca", "cab"]);
        let err = swap(&grid, Position::new(0, 0), Position::new(2, 2)).unwrap_err();
        assert_eq!(
            err,
            SwapError::NotAdjacent(Position::new(0, 0), Position::new(2, 2))
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "SWAP_NOT_ADJACENT");
    }

    #[test]
    fn swap_rejects_out_of_bounds_positions() {
        let grid = grid_fixture(&["abc", "bca", "cab"]);
        let err = swap(&grid, Position::new(0, 3), Position::new(0, 2)).unwrap_err();
        assert_eq!(err, SwapError::OutOfBounds(Position::new(0, 3)));
        assert_eq!(err.error_code(), "SWAP_OUT_OF_BOUNDS");
    }

    #[test]
    fn swap_twice_restores_the_original_grid() {
        let grid = grid_fixture(&["abc", "bca", "cab"]);
        let a = Position::new(1, 1);
        let b = Position::new(1, 2);
        let once = swap(&grid, a, b).unwrap();
        assert_ne!(once, grid);
        let twice = swap(&once, a, b).unwrap();
        assert_eq!(twice, grid);
    }

    #[test]
    fn swap_leaves_the_input_grid_untouched() {
        let grid = grid_fixture(&["abc", "bca", "cab"]);
        let copy = grid.clone();
        swap(&grid, Position::new(0, 0), Position::new(0, 1)).unwrap();
        assert_eq!(grid, copy);
    }

    #[test]
    fn finds_the_first_match_producing_swap() {
        // Swapping (0,2) down to (1,2) completes "aaa" on the top row.
        let grid = grid_fixture(&["aabc", "bcab", "cabc", "abca"]);
        let pair = find_potential_move(&grid);
        assert_eq!(pair, Some((Position::new(0, 2), Position::new(1, 2))));
    }

    #[test]
    fn two_symbol_checkerboard_has_no_legal_move() {
        let grid = grid_fixture(&["abab", "baba", "abab", "baba"]);
        assert_eq!(find_potential_move(&grid), None);
    }
}
