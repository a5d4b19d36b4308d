use core::fmt;

use crate::config::BoardConfig;

use super::tile::Tile;

/// Discrete board coordinate: `(row, col)` with row 0 at the top.
///
/// The derived ordering is row-major, so `BTreeSet<Position>` iterates
/// top-left to bottom-right — the deterministic order clear sets and
/// worklists rely on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position displaced by the given row/column deltas.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Taxicab distance to another position.
    #[inline]
    pub const fn manhattan(self, other: Self) -> u32 {
        (self.row - other.row).unsigned_abs() + (self.col - other.col).unsigned_abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size square matrix of tiles, stored row-major.
///
/// The grid is value-like: engine operations consume a grid and return a new
/// one, and the host replaces its single authoritative copy wholesale after
/// each call. Between engine calls every cell holds a real symbol; vacancy
/// only appears transiently inside a cascade round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    side: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates an all-vacant grid. `side` must lie within
    /// [`BoardConfig::MIN_SIDE`]..=[`BoardConfig::MAX_SIDE`]; run storage is
    /// bounded by the latter.
    pub fn vacant(side: usize) -> Self {
        debug_assert!(
            (BoardConfig::MIN_SIDE..=BoardConfig::MAX_SIDE).contains(&side),
            "unsupported board side {side}"
        );
        Self {
            side,
            tiles: vec![Tile::Vacant; side * side],
        }
    }

    /// Side length of the square board.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns true when the position lies on the board.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as usize) < self.side
            && (position.col as usize) < self.side
    }

    /// Reads the tile at a position, or `None` outside the board.
    #[inline]
    pub fn get(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Writes a tile; returns false (and writes nothing) outside the board.
    pub fn set(&mut self, position: Position, tile: Tile) -> bool {
        match self.index(position) {
            Some(index) => {
                self.tiles[index] = tile;
                true
            }
            None => false,
        }
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side as i32;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    /// Number of vacant cells.
    pub fn vacancies(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_vacant()).count()
    }

    /// True when no cell is vacant — the state hosts observe between rounds.
    pub fn is_fully_filled(&self) -> bool {
        self.vacancies() == 0
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.side + position.col as usize)
    }
}

/// Builds a grid from ASCII art rows: `'a'..='z'` map to symbols 0..,
/// `'.'` is vacant. Rows must form a square.
#[cfg(test)]
pub(crate) fn grid_fixture(rows: &[&str]) -> Grid {
    use super::tile::Symbol;

    let side = rows.len();
    let mut grid = Grid::vacant(side);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), side, "fixture rows must form a square");
        for (col, ch) in line.chars().enumerate() {
            let tile = match ch {
                '.' => Tile::Vacant,
                ch => Tile::plain(Symbol(ch as u8 - b'a')),
            };
            grid.set(Position::new(row as i32, col as i32), tile);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::super::tile::Symbol;
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut grid = Grid::vacant(4);
        let position = Position::new(2, 3);
        assert!(grid.set(position, Tile::plain(Symbol(1))));
        assert_eq!(grid.get(position), Some(Tile::plain(Symbol(1))));
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::vacant(4);
        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(4, 0),
            Position::new(0, 4),
        ] {
            assert!(!grid.contains(position));
            assert_eq!(grid.get(position), None);
            assert!(!grid.set(position, Tile::plain(Symbol(0))));
        }
    }

    #[test]
    fn vacancy_census_tracks_fill_state() {
        let mut grid = Grid::vacant(3);
        assert_eq!(grid.vacancies(), 9);
        for position in grid.positions().collect::<Vec<_>>() {
            grid.set(position, Tile::plain(Symbol(0)));
        }
        assert!(grid.is_fully_filled());
    }

    #[test]
    fn position_ordering_is_row_major() {
        use std::collections::BTreeSet;

        let set: BTreeSet<Position> = [
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ]
        .into_iter()
        .collect();
        let ordered: Vec<Position> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
            ]
        );
    }
}
